use std::cell::Cell;
use std::rc::Rc;

use squish_core::consts::{QUALITY_MAX, QUALITY_MIN};
use squish_core::quality::{ObserverId, Quality, QualityKnob};

/// Slider and spin box bound to one `QualityKnob`.
///
/// Each widget edits its own cell and reports the edit as its own origin, so
/// the knob updates the other widget but never echoes back.
pub struct QualityControls {
    knob: QualityKnob,
    slider: Rc<Cell<u8>>,
    spin: Rc<Cell<u8>>,
    slider_id: ObserverId,
    spin_id: ObserverId,
    changed: Rc<Cell<bool>>,
}

impl QualityControls {
    pub fn new(initial: Quality) -> Self {
        let mut knob = QualityKnob::new(initial);
        let slider = Rc::new(Cell::new(initial.get()));
        let spin = Rc::new(Cell::new(initial.get()));
        let changed = Rc::new(Cell::new(false));

        let slider_id = {
            let cell = Rc::clone(&slider);
            knob.subscribe(move |q| cell.set(q.get()))
        };
        let spin_id = {
            let cell = Rc::clone(&spin);
            knob.subscribe(move |q| cell.set(q.get()))
        };
        {
            let flag = Rc::clone(&changed);
            knob.subscribe(move |_| flag.set(true));
        }

        Self {
            knob,
            slider,
            spin,
            slider_id,
            spin_id,
            changed,
        }
    }

    pub fn value(&self) -> Quality {
        self.knob.value()
    }

    /// Draws both widgets. Returns `true` when the quality changed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let range = QUALITY_MIN..=QUALITY_MAX;

        let mut spin = self.spin.get();
        if ui
            .add(egui::DragValue::new(&mut spin).range(range.clone()))
            .changed()
        {
            self.edit(Widget::Spin, spin);
        }

        let mut slider = self.slider.get();
        if ui
            .add(egui::Slider::new(&mut slider, range).show_value(false))
            .changed()
        {
            self.edit(Widget::Slider, slider);
        }

        self.changed.replace(false)
    }

    fn edit(&mut self, widget: Widget, value: u8) {
        let (cell, origin) = match widget {
            Widget::Slider => (&self.slider, self.slider_id),
            Widget::Spin => (&self.spin, self.spin_id),
        };
        cell.set(value);
        self.knob.set(Some(origin), Quality::clamped(i64::from(value)));
    }
}

#[derive(Clone, Copy)]
enum Widget {
    Slider,
    Spin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_updates_other_widget() {
        let mut controls = QualityControls::new(Quality::clamped(5));
        controls.edit(Widget::Slider, 12);
        assert_eq!(controls.value().get(), 12);
        assert_eq!(controls.spin.get(), 12);
        assert_eq!(controls.slider.get(), 12);
        assert!(controls.changed.replace(false));
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut controls = QualityControls::new(Quality::clamped(5));
        controls.edit(Widget::Spin, 5);
        assert!(!controls.changed.get());
    }
}
