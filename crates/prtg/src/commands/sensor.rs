//! Version and sensor detail handlers.

use std::fmt::Write as _;

use serde::Serialize;

use prtg_core::{Prtg, SensorDetail};

use crate::cli::{GlobalOpts, SensorArgs};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct VersionInfo<'a> {
    server: &'a str,
    prtg_version: &'a str,
}

pub async fn version(prtg: &Prtg, global: &GlobalOpts) -> Result<(), CliError> {
    let version = util::with_spinner(global, "Querying server version", prtg.version()).await?;
    let info = VersionInfo {
        server: prtg.client().base_url().as_str(),
        prtg_version: &version,
    };
    let out = output::render_single(
        global.output,
        &info,
        |v| format!("{} ({})", v.prtg_version, v.server),
        |v| v.prtg_version.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(prtg: &Prtg, args: SensorArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let fut = async {
        if args.xml {
            prtg.sensor_detail_xml(args.id).await
        } else {
            prtg.sensor_detail(args.id).await
        }
    };
    let detail = util::with_spinner(global, "Fetching sensor", fut).await?;

    let color = output::should_color(global.color);
    let out = output::render_single(
        global.output,
        &detail,
        |d| detail_view(d, color),
        |d| d.name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail_view(d: &SensorDetail, color: bool) -> String {
    let fields: [(&str, String); 16] = [
        ("Name", d.name.clone()),
        ("Type", d.sensor_type.clone()),
        ("Status", output::paint_status(&d.status_text, color)),
        ("Interval", d.interval.clone()),
        ("Probe", d.probe_name.clone()),
        ("Group", d.parent_group_name.clone()),
        (
            "Device",
            format!("{} ({})", d.parent_device_name, d.parent_device_id),
        ),
        ("Last value", d.last_value.clone()),
        ("Message", d.last_message.clone()),
        ("Last check", d.last_check.clone()),
        ("Last up", d.last_up.clone()),
        ("Last down", d.last_down.clone()),
        ("Uptime", format!("{} ({})", d.uptime, d.uptime_time)),
        ("Downtime", format!("{} ({})", d.downtime, d.downtime_time)),
        ("Coverage", d.up_down_total.clone()),
        ("Since", d.up_down_since.clone()),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        if value.trim().is_empty() || value == " ()" {
            continue;
        }
        let _ = writeln!(out, "{:<12} {value}", format!("{label}:"));
    }
    out.trim_end().to_owned()
}
