/// Something that moves under its own power.
///
/// Each variant supplies its own `propulsion_status`; there is no inherited
/// default to forget to override.
pub trait Mover {
    /// What kind of vehicle this is, e.g. `"Car"`.
    fn kind(&self) -> &str;

    fn top_speed(&self) -> u32;

    /// Status after trying to start the vehicle. Always succeeds.
    fn propulsion_status(&self) -> String;

    /// Summary built only from the required operations.
    fn describe(&self) -> String {
        format!(
            "{}: {}; max speed {} km/h",
            self.kind(),
            self.propulsion_status(),
            self.top_speed()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    top_speed: u32,
}

impl Car {
    pub fn new(top_speed: u32) -> Self {
        Self { top_speed }
    }
}

impl Mover for Car {
    fn kind(&self) -> &str {
        "Car"
    }

    fn top_speed(&self) -> u32 {
        self.top_speed
    }

    fn propulsion_status(&self) -> String {
        "Engine started".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bicycle {
    top_speed: u32,
}

impl Bicycle {
    pub fn new(top_speed: u32) -> Self {
        Self { top_speed }
    }
}

impl Mover for Bicycle {
    fn kind(&self) -> &str {
        "Bicycle"
    }

    fn top_speed(&self) -> u32 {
        self.top_speed
    }

    fn propulsion_status(&self) -> String {
        "No engine to start; pedalling instead".to_string()
    }
}

/// Reports on any mover without caring which one it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct Garage;

impl Garage {
    pub fn report(&self, mover: &dyn Mover) -> String {
        tracing::debug!(kind = mover.kind(), "reporting on mover");
        mover.describe()
    }
}
