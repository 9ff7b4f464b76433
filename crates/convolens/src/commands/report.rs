use crate::cli::{DataArgs, SampleArgs};
use crate::render::render_dashboard;
use convolens_core::Dashboard;

pub fn run(data: &DataArgs, sample: &SampleArgs) -> anyhow::Result<()> {
    let records = super::load_dataset(&data.file)?;
    let config = super::resolve_config(sample)?;
    let mut rng = super::sampler(sample.seed);

    let dashboard = Dashboard::build(&records, &config, &mut rng);
    if data.json {
        super::print_json(&dashboard)
    } else {
        println!("{}", render_dashboard(&dashboard));
        Ok(())
    }
}
