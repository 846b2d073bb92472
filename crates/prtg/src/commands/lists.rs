//! Sensor, device and group list handlers.

use tabled::Tabled;

use prtg_core::{Prtg, TableContent, TableRow};

use crate::cli::{GlobalOpts, ListArgs};
use crate::commands::util::{self, or_dash};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SensorRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Probe")]
    probe: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Sensor")]
    sensor: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Last Value")]
    last_value: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&TableRow> for SensorRow {
    fn from(r: &TableRow) -> Self {
        Self {
            id: r.object_id,
            probe: or_dash(&r.probe),
            group: or_dash(&r.group),
            device: or_dash(&r.device),
            sensor: or_dash(&r.sensor),
            status: or_dash(&r.status),
            last_value: or_dash(&r.last_value),
            message: or_dash(&r.message),
        }
    }
}

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Probe")]
    probe: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Host")]
    host: String,
    #[tabled(rename = "Up")]
    up: u64,
    #[tabled(rename = "Warn")]
    warning: u64,
    #[tabled(rename = "Down")]
    down: u64,
    #[tabled(rename = "Paused")]
    paused: u64,
    #[tabled(rename = "Total")]
    total: u64,
}

impl From<&TableRow> for DeviceRow {
    fn from(r: &TableRow) -> Self {
        Self {
            id: r.object_id,
            probe: or_dash(&r.probe),
            group: or_dash(&r.group),
            device: or_dash(&r.device),
            host: or_dash(&r.host),
            up: r.counts.up,
            warning: r.counts.warning,
            down: r.counts.down + r.counts.partial_down + r.counts.down_acknowledged,
            paused: r.counts.paused,
            total: r.counts.total(),
        }
    }
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Probe")]
    probe: String,
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Up")]
    up: u64,
    #[tabled(rename = "Warn")]
    warning: u64,
    #[tabled(rename = "Down")]
    down: u64,
    #[tabled(rename = "Paused")]
    paused: u64,
    #[tabled(rename = "Total")]
    total: u64,
}

impl From<&TableRow> for GroupRow {
    fn from(r: &TableRow) -> Self {
        Self {
            id: r.object_id,
            probe: or_dash(&r.probe),
            group: or_dash(&r.group),
            name: or_dash(&r.name),
            up: r.counts.up,
            warning: r.counts.warning,
            down: r.counts.down + r.counts.partial_down + r.counts.down_acknowledged,
            paused: r.counts.paused,
            total: r.counts.total(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    prtg: &Prtg,
    content: TableContent,
    args: ListArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let columns = util::column_refs(&args.columns);
    let columns = columns.as_deref();

    let message = format!("Listing {content}");
    let fut = async {
        match content {
            TableContent::Sensors => prtg.sensor_list(args.id, columns).await,
            TableContent::Devices => prtg.device_list(args.id, columns).await,
            TableContent::Groups => prtg.group_list(args.id, columns).await,
        }
    };
    let rows = util::with_spinner(global, &message, fut).await?;

    let id = |r: &TableRow| r.object_id.to_string();
    let out = match content {
        TableContent::Sensors => {
            output::render_list(global.output, &rows, |r| SensorRow::from(r), id)?
        }
        TableContent::Devices => {
            output::render_list(global.output, &rows, |r| DeviceRow::from(r), id)?
        }
        TableContent::Groups => {
            output::render_list(global.output, &rows, |r| GroupRow::from(r), id)?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
