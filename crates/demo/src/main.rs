use solid_core::Console;
use solid_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    solid_observability::init();

    let config = DemoConfig::from_env();
    solid_demo::run(&Console::stdout(), &config)?;
    Ok(())
}
