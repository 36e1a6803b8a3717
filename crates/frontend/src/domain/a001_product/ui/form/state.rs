//! Plain state of the product form: validation gate and image slot.
//!
//! Nothing here depends on the DOM, so the rules are unit tested natively.
//! The view model wraps these values in signals.

use contracts::shared::validation::{ValidationError, Validity};

/// A control whose validity gates the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Name,
    Description,
    Price,
    Image,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::Name,
        Control::Description,
        Control::Price,
        Control::Image,
    ];

    fn index(self) -> usize {
        match self {
            Control::Name => 0,
            Control::Description => 1,
            Control::Price => 2,
            Control::Image => 3,
        }
    }
}

/// Aggregates the validity reported by each control.
///
/// A control that has not reported yet (or was unmounted) counts as invalid,
/// so the gate starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationGate {
    reports: [Option<Validity>; 4],
}

impl ValidationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, control: Control, validity: Validity) {
        self.reports[control.index()] = Some(validity);
    }

    pub fn detach(&mut self, control: Control) {
        self.reports[control.index()] = None;
    }

    pub fn apply(&mut self, control: Control, validity: Option<Validity>) {
        match validity {
            Some(v) => self.report(control, v),
            None => self.detach(control),
        }
    }

    pub fn validity(&self, control: Control) -> Option<&Validity> {
        self.reports[control.index()].as_ref()
    }

    pub fn is_open(&self) -> bool {
        Control::ALL
            .iter()
            .all(|c| matches!(self.validity(*c), Some(Ok(()))))
    }

    /// First control keeping the gate closed. `None` error means "not mounted".
    pub fn first_error(&self) -> Option<(Control, Option<ValidationError>)> {
        Control::ALL.iter().find_map(|c| match self.validity(*c) {
            Some(Ok(())) => None,
            Some(Err(e)) => Some((*c, Some(e.clone()))),
            None => Some((*c, None)),
        })
    }
}

/// Store the first file of a selection.
///
/// An empty selection leaves the previous image in place; there is no
/// clearing path. Returns whether the slot changed.
pub fn select_image<F>(slot: &mut Option<F>, first_file: Option<F>) -> bool {
    match first_file {
        Some(file) => {
            *slot = Some(file);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::form::FieldKey;
    use contracts::domain::a001_product::rules;
    use contracts::shared::validation::check_file;

    fn all_valid() -> ValidationGate {
        let mut gate = ValidationGate::new();
        for c in Control::ALL {
            gate.report(c, Ok(()));
        }
        gate
    }

    #[test]
    fn test_gate_starts_closed() {
        let gate = ValidationGate::new();
        assert!(!gate.is_open());
        assert_eq!(gate.first_error(), Some((Control::Name, None)));
    }

    #[test]
    fn test_gate_open_only_when_every_control_is_valid() {
        let mut gate = all_valid();
        assert!(gate.is_open());

        for c in Control::ALL {
            gate.report(c, Err(ValidationError::Empty));
            assert!(!gate.is_open(), "{:?} invalid should close the gate", c);
            gate.report(c, Ok(()));
            assert!(gate.is_open(), "{:?} valid again should reopen the gate", c);
        }
    }

    #[test]
    fn test_detached_control_closes_gate() {
        let mut gate = all_valid();
        gate.detach(Control::Price);
        assert!(!gate.is_open());
        assert_eq!(gate.first_error(), Some((Control::Price, None)));
    }

    #[test]
    fn test_select_image_replaces_or_keeps() {
        let mut slot: Option<&str> = None;
        assert!(!select_image(&mut slot, None));
        assert_eq!(slot, None);

        assert!(select_image(&mut slot, Some("mouse.png")));
        assert_eq!(slot, Some("mouse.png"));

        assert!(!select_image(&mut slot, None));
        assert_eq!(slot, Some("mouse.png"));

        assert!(select_image(&mut slot, Some("mouse-2.png")));
        assert_eq!(slot, Some("mouse-2.png"));
    }

    fn gate_for(name: &str, description: &str, price: &str, image: Option<&str>) -> ValidationGate {
        let mut gate = ValidationGate::new();
        gate.report(Control::Name, rules::for_field(FieldKey::Name).check(name));
        gate.report(
            Control::Description,
            rules::for_field(FieldKey::Description).check(description),
        );
        gate.report(Control::Price, rules::for_field(FieldKey::Price).check(price));
        gate.report(
            Control::Image,
            check_file(image.is_some(), rules::IMAGE_REQUIRED),
        );
        gate
    }

    #[test]
    fn test_complete_product_opens_gate() {
        let gate = gate_for(
            "Wireless Mouse",
            "Ergonomic mouse with silent clicks",
            "19.99",
            Some("mouse.png"),
        );
        assert!(gate.is_open());
    }

    #[test]
    fn test_short_description_keeps_gate_closed() {
        let gate = gate_for("Wireless Mouse", "Ergonomic.", "19.99", Some("mouse.png"));
        assert!(!gate.is_open());
        assert_eq!(
            gate.first_error(),
            Some((
                Control::Description,
                Some(ValidationError::TooShort { min: 20, actual: 10 })
            ))
        );
    }

    #[test]
    fn test_missing_image_keeps_gate_closed() {
        let gate = gate_for(
            "Wireless Mouse",
            "Ergonomic mouse with silent clicks",
            "19.99",
            None,
        );
        assert!(!gate.is_open());
    }
}
