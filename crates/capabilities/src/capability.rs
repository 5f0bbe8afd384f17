//! One small trait per capability.

pub trait Walk {
    fn walk(&self) -> String;
}

pub trait Swim {
    fn swim(&self) -> String;
}

pub trait Fly {
    fn fly(&self) -> String;
}

/// Consumers ask for exactly the capability they use.
pub fn walk_show(walker: &impl Walk) -> String {
    walker.walk()
}

pub fn swim_show(swimmer: &impl Swim) -> String {
    swimmer.swim()
}

pub fn fly_show(flyer: &impl Fly) -> String {
    flyer.fly()
}
