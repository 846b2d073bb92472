//! Sensor tree handler.

use tabled::Tabled;

use prtg_core::{FlatSensor, Prtg, flatten, render};

use crate::cli::{GlobalOpts, OutputFormat, TreeArgs};
use crate::commands::util::{self, or_dash};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct FlatRow {
    #[tabled(rename = "Groups")]
    groups: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Sensor")]
    sensor: String,
}

impl From<&FlatSensor> for FlatRow {
    fn from(f: &FlatSensor) -> Self {
        Self {
            groups: f.group_ladder.join(" / "),
            device: or_dash(f.device.as_deref().unwrap_or_default()),
            sensor: f.sensor.clone(),
        }
    }
}

pub async fn handle(prtg: &Prtg, args: TreeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let tree =
        util::with_spinner(global, "Fetching sensor tree", prtg.sensor_tree(args.id)).await?;
    tracing::debug!(sensors = tree.sensor_count(), "sensor tree loaded");

    let out = if args.flat {
        let records = flatten(&tree);
        output::render_list(
            global.output,
            &records,
            |f| FlatRow::from(f),
            |f| f.sensor.clone(),
        )?
    } else {
        match global.output {
            OutputFormat::Table | OutputFormat::Plain => {
                let color =
                    global.output == OutputFormat::Table && output::should_color(global.color);
                render(&tree, 0)
                    .into_iter()
                    .map(|line| paint_line(line, color))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            format => {
                output::render_single(format, &tree, |_| String::new(), |_| String::new())?
            }
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Color the trailing `[status]` of a sensor line.
fn paint_line(line: String, color: bool) -> String {
    if !color || !line.ends_with(']') {
        return line;
    }
    match line.rfind(" [") {
        Some(pos) => {
            let status = &line[pos + 2..line.len() - 1];
            format!("{} [{}]", &line[..pos], output::paint_status(status, true))
        }
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_row_joins_ladder() {
        let row = FlatRow::from(&FlatSensor {
            group_ladder: vec!["Root (0)".into(), "Local Probe (1)".into()],
            device: None,
            sensor: "Probe Health (1001)".into(),
        });
        assert_eq!(row.groups, "Root (0) / Local Probe (1)");
        assert_eq!(row.device, "-");
    }

    #[test]
    fn uncolored_lines_pass_through() {
        let line = "|------Sensor: PING 1 (2925) [Up]".to_owned();
        assert_eq!(paint_line(line.clone(), false), line);
        assert!(paint_line(line.clone(), true).starts_with("|------Sensor: PING 1 (2925) ["));
    }
}
