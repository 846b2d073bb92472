//! Historic data handler.

use chrono::Utc;

use prtg_core::{HistoricPoint, Prtg};

use crate::cli::{GlobalOpts, HistoryArgs, OutputFormat};
use crate::commands::util;
use crate::error::CliError;
use crate::output;

pub async fn handle(prtg: &Prtg, args: HistoryArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let end = args.end.unwrap_or_else(Utc::now);
    let fut = async {
        if args.xml {
            prtg.historic_data_xml(args.id, args.avg, args.start, end)
                .await
        } else {
            prtg.historic_data(args.id, args.avg, args.start, end).await
        }
    };
    let points = util::with_spinner(global, "Fetching historic data", fut).await?;

    let out = match global.output {
        // Channel columns are only known once the data is in
        OutputFormat::Table => {
            let header = column_union(&points);
            let rows: Vec<Vec<String>> = points
                .iter()
                .map(|p| {
                    header
                        .iter()
                        .map(|col| p.get(col).map(ToString::to_string).unwrap_or_default())
                        .collect()
                })
                .collect();
            output::render_grid(&header, &rows)
        }
        OutputFormat::Plain => points
            .iter()
            .map(|p| {
                p.datetime()
                    .map(str::to_owned)
                    .or_else(|| p.timestamp().as_ref().map(ToString::to_string))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join("\n"),
        format => {
            output::render_single(format, points.as_slice(), |_| String::new(), |_| String::new())?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Every column seen in `points`, in first-seen order.
fn column_union(points: &[HistoricPoint]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for col in points.iter().flat_map(HistoricPoint::columns) {
        if !columns.iter().any(|c| c == col) {
            columns.push(col.to_owned());
        }
    }
    columns
}
