use std::path::Path;

use console::Style;
use squish_core::compress::CompressionResult;
use squish_core::format::format_file_size;
use squish_core::quality::Quality;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    good: Style,
    poor: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green(),
            poor: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }

    /// Green when the output is smaller than the input, yellow otherwise.
    fn ratio(&self, ratio_percent: f64) -> &Style {
        if ratio_percent < 100.0 {
            &self.good
        } else {
            &self.poor
        }
    }
}

fn size_text(bytes: u64) -> String {
    format_file_size(bytes).trim_start_matches("Size: ").to_string()
}

pub fn print_compression_summary(input: &Path, quality: Quality, result: &CompressionResult) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Squish"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(6)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(result.output_path.display())
    );
    println!("  {:<14}{}", s.label.apply_to("Quality"), s.value.apply_to(quality));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input size"),
        s.value.apply_to(size_text(result.input_size_bytes))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output size"),
        s.value.apply_to(size_text(result.output_size_bytes))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Ratio"),
        s.ratio(result.ratio_percent)
            .apply_to(format!("{:.1}%", result.ratio_percent))
    );
    println!();
}

pub fn print_sweep_table(input: &Path, rows: &[(Quality, CompressionResult)]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(format!("Quality sweep: {}", input.display())));
    println!();
    println!(
        "  {:>8}  {:>12}  {:>8}",
        s.label.apply_to("Quality"),
        s.label.apply_to("Size"),
        s.label.apply_to("Ratio")
    );
    for (quality, result) in rows {
        println!(
            "  {:>8}  {:>12}  {:>8}",
            s.value.apply_to(quality),
            size_text(result.output_size_bytes),
            s.ratio(result.ratio_percent)
                .apply_to(format!("{:.1}%", result.ratio_percent))
        );
    }
    println!();
}
