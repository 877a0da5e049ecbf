//! Basic usage: simulate an antagonist pair and report its co-activation metrics

use coact_metrics::{CoactivationAnalyzer, MetricConfig, PotentialField};
use coact_simulation::{ActivitySimulator, SimulationConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = SimulationConfig { seed: Some(2016), ..SimulationConfig::antagonist_pair() };
    let signal = ActivitySimulator::new(config)?.generate(3.0)?;
    println!("Simulated {} frames x {} channels", signal.frames(), signal.channels());

    for (name, potential) in PotentialField::presets() {
        let analyzer = CoactivationAnalyzer::new(MetricConfig::default().with_potential(potential))?;
        let report = analyzer.analyze(&signal)?;
        println!("{:<20} metric = {:>10.6}  path length = {:.6}", name, report.metric, report.path_length);
    }

    let report = CoactivationAnalyzer::default().analyze(&signal)?;
    println!("{}", report.to_json()?);

    Ok(())
}
