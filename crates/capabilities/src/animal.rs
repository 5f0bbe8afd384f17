use crate::capability::{Fly, Swim, Walk};

/// Swims. Nothing else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fish;

impl Swim for Fish {
    fn swim(&self) -> String {
        "Fish swims with its fins".to_string()
    }
}

/// Walks, swims and flies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Duck;

impl Walk for Duck {
    fn walk(&self) -> String {
        "Duck waddles along the bank".to_string()
    }
}

impl Swim for Duck {
    fn swim(&self) -> String {
        "Duck paddles across the pond".to_string()
    }
}

impl Fly for Duck {
    fn fly(&self) -> String {
        "Duck flies with its wings".to_string()
    }
}
