use super::chart::{ChartSink, plan_chart};
use super::csv::write_csv;
use super::json::write_json;
use super::table::TableStyle;
use super::target::Target;
use crate::{Error, Result, SeriesSet, align};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};

/// Everything the router needs besides the series themselves.
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    /// Output hint: a file path, the `stdout` sentinel, or `None` to display.
    pub output: Option<String>,
    /// Label whose series becomes the chart X axis. An empty label means none.
    pub x_label: Option<String>,
    /// Smoothing weight for charts, in `[0, 1)`.
    pub smooth: f64,
    pub table_style: TableStyle,
}

impl RouteConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.smooth) {
            return Err(Error::InvalidOption(format!("smoothing weight must be in [0, 1), got {}", self.smooth)));
        }
        Ok(())
    }
}

/// Send `series` to the sink selected by `config`, printing to stdout when
/// the target asks for it.
pub fn route(series: SeriesSet, config: &RouteConfig, chart: &dyn ChartSink) -> Result<Target> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    route_to(series, config, chart, &mut out)
}

/// Like [`route`], with an explicit writer standing in for stdout.
pub fn route_to(series: SeriesSet, config: &RouteConfig, chart: &dyn ChartSink, out: &mut dyn Write) -> Result<Target> {
    config.validate()?;
    let target = Target::classify(config.output.as_deref(), chart);
    debug!("output target: {:?}", target);
    let x_label = config.x_label.as_deref().filter(|label| !label.is_empty());

    match &target {
        Target::Image(path) => {
            let plan = plan_chart(series, x_label, config.smooth)?;
            chart.save(&plan, path)?;
            info!("saved chart to {}", path.display());
        }
        Target::Display => {
            let plan = plan_chart(series, x_label, config.smooth)?;
            chart.display(&plan, out)?;
        }
        Target::Csv(path) => {
            let table = align(&series);
            write_csv(&table, BufWriter::new(File::create(path)?))?;
            info!("wrote {} rows to {}", table.height(), path.display());
        }
        Target::Json(path) => {
            write_json(&series, BufWriter::new(File::create(path)?))?;
            info!("wrote {} series to {}", series.len(), path.display());
        }
        Target::Text(path) => {
            let text = render_table(&series, config.table_style);
            let mut file = BufWriter::new(File::create(path)?);
            writeln!(file, "{text}")?;
            file.flush()?;
            info!("wrote table to {}", path.display());
        }
        Target::Stdout => {
            writeln!(out, "{}", render_table(&series, config.table_style))?;
            out.flush()?;
        }
    }
    Ok(target)
}

fn render_table(series: &SeriesSet, style: TableStyle) -> String {
    debug!("rendering text table with the {} renderer", style);
    style.renderer().render(&align(series))
}
