use squish_core::view::Vec2;

/// Decoded image as an egui texture source.
pub fn to_color_image(img: &image::DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

pub fn image_size(image: &egui::ColorImage) -> Vec2 {
    Vec2::new(image.size[0] as f32, image.size[1] as f32)
}

pub fn to_vec2(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn from_vec2(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}
