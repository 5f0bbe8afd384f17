//! Driver wiring every example family together.
//!
//! Pure composition: build variants, hand them to consumers, print the result.
//! Failures are returned as-is.

pub mod config;

pub use config::DemoConfig;

use solid_capabilities::{Duck, Fish, fly_show, swim_show};
use solid_core::{Console, DesignResult, render_line};
use solid_mobility::{Bicycle, Car, Garage, Mover};
use solid_pricing::{Checkout, DiscountPolicy, Item, ItemPresenter, PercentageDiscount};
use solid_storage::{AuditLogger, Clock, DatabaseStorage, FileStorage, Sink};

/// Run all five demonstrations in order, writing to `console`.
pub fn run(console: &Console, config: &DemoConfig) -> DesignResult<()> {
    let clock = config.clock();
    tracing::info!("running demonstrations");

    single_responsibility(console)?;
    open_closed(console)?;
    liskov_substitution(console)?;
    interface_segregation(console)?;
    dependency_inversion(console, &clock, &config.audit_message)?;

    tracing::info!("demonstrations finished");
    Ok(())
}

fn single_responsibility(console: &Console) -> DesignResult<()> {
    let laptop = Item::new("Laptop", 999.99)?;
    console.line(&render_line("SRP", &ItemPresenter.describe(&laptop)))
}

fn open_closed(console: &Console) -> DesignResult<()> {
    let laptop = Item::new("Laptop", 999.99)?;
    let ten = PercentageDiscount::ten();
    let twenty = PercentageDiscount::twenty();
    let policies: [&dyn DiscountPolicy; 2] = [&ten, &twenty];

    for policy in policies {
        console.line(&render_line("OCP", &Checkout::new(policy).quote(&laptop)))?;
    }
    Ok(())
}

fn liskov_substitution(console: &Console) -> DesignResult<()> {
    let car = Car::new(200);
    let bicycle = Bicycle::new(30);
    let movers: [&dyn Mover; 2] = [&car, &bicycle];

    for mover in movers {
        console.line(&render_line("LSP", &Garage.report(mover)))?;
    }
    Ok(())
}

fn interface_segregation(console: &Console) -> DesignResult<()> {
    console.line(&render_line("ISP", &swim_show(&Fish)))?;
    console.line(&render_line("ISP", &fly_show(&Duck)))
}

fn dependency_inversion<C: Clock>(console: &Console, clock: &C, message: &str) -> DesignResult<()> {
    log_through(console, FileStorage::new(console.clone()), clock, message)?;
    log_through(console, DatabaseStorage::new(console.clone()), clock, message)
}

fn log_through<S: Sink, C: Clock>(
    console: &Console,
    sink: S,
    clock: &C,
    message: &str,
) -> DesignResult<()> {
    console.line(&render_line(
        "DIP",
        &format!("Logging to {}", sink.destination()),
    ))?;
    AuditLogger::new(sink, clock).log(message)
}
