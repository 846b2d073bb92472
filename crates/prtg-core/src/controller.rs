// ── Query façade ──
//
// The public operations of the library. Each one validates its inputs,
// builds exactly one request, fetches it, and decodes the body according to
// the content kind the server declared. List-returning operations treat
// zero rows as an error. No state is shared between calls.

use chrono::{DateTime, Utc};
use tracing::debug;

use prtg_api::{ContentKind, Endpoint, Payload, PrtgClient, Request};

use crate::config::ClientConfig;
use crate::decode;
use crate::error::CoreError;
use crate::model::{HistoricPoint, SensorDetail, SensorTree, TableContent, TableRow};

/// Widest historic-data window PRTG serves in one request (inclusive).
pub const MAX_HISTORIC_RANGE_SECS: i64 = 31 * 24 * 60 * 60;

/// `sDate`/`eDate` wire format.
const DATE_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Client for one PRTG server.
pub struct Prtg {
    client: PrtgClient,
}

impl Prtg {
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = PrtgClient::new(
            config.url.as_str(),
            config.credentials.clone(),
            &config.transport(),
        )?;
        Ok(Self { client })
    }

    /// Wrap an already-built HTTP client.
    pub fn from_client(client: PrtgClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PrtgClient {
        &self.client
    }

    // ── Sensor details ───────────────────────────────────────────────

    /// The server's PRTG version string.
    pub async fn version(&self) -> Result<String, CoreError> {
        debug!("querying PRTG version");
        let payload = self
            .fetch(Request::new(Endpoint::SensorDetails).param("id", 0))
            .await?;
        Ok(decode::decode_sensor_detail(payload.kind, &payload.body)?.prtg_version)
    }

    pub async fn sensor_detail(&self, id: i64) -> Result<SensorDetail, CoreError> {
        self.sensor_detail_as(id, ContentKind::Json).await
    }

    /// Same as [`sensor_detail`](Self::sensor_detail), asking for XML.
    pub async fn sensor_detail_xml(&self, id: i64) -> Result<SensorDetail, CoreError> {
        self.sensor_detail_as(id, ContentKind::Xml).await
    }

    async fn sensor_detail_as(
        &self,
        id: i64,
        format: ContentKind,
    ) -> Result<SensorDetail, CoreError> {
        validate_id(id)?;
        debug!(id, %format, "querying sensor detail");
        let payload = self
            .fetch(
                Request::new(Endpoint::SensorDetails)
                    .format(format)
                    .param("id", id),
            )
            .await?;
        Ok(decode::decode_sensor_detail(payload.kind, &payload.body)?.sensor)
    }

    // ── Table lists ──────────────────────────────────────────────────

    /// Sensors below object `id`. `None` (or more columns than the default
    /// set) requests the default columns.
    pub async fn sensor_list(
        &self,
        id: i64,
        columns: Option<&[&str]>,
    ) -> Result<Vec<TableRow>, CoreError> {
        self.table_list(TableContent::Sensors, id, columns).await
    }

    pub async fn device_list(
        &self,
        id: i64,
        columns: Option<&[&str]>,
    ) -> Result<Vec<TableRow>, CoreError> {
        self.table_list(TableContent::Devices, id, columns).await
    }

    /// Groups below object `id`, including nested ones.
    pub async fn group_list(
        &self,
        id: i64,
        columns: Option<&[&str]>,
    ) -> Result<Vec<TableRow>, CoreError> {
        self.table_list(TableContent::Groups, id, columns).await
    }

    async fn table_list(
        &self,
        content: TableContent,
        id: i64,
        columns: Option<&[&str]>,
    ) -> Result<Vec<TableRow>, CoreError> {
        validate_id(id)?;
        debug!(id, %content, "querying table list");
        let payload = self
            .fetch(
                Request::new(Endpoint::TableList)
                    .param("id", id)
                    .param("content", content)
                    .param("columns", content.columns_param(columns)),
            )
            .await?;
        let rows = decode::decode_table_list(content, payload.kind, &payload.body)?.rows;
        non_empty(rows, || format!("{content} under object {id}"))
    }

    // ── Historic data ────────────────────────────────────────────────

    /// Channel values of sensor `id` between `start` and `end`, averaged
    /// over `average` seconds (0 for raw values). The window may span at
    /// most 31 days.
    pub async fn historic_data(
        &self,
        id: i64,
        average: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HistoricPoint>, CoreError> {
        self.historic_data_as(id, average, start, end, ContentKind::Json)
            .await
    }

    /// Same as [`historic_data`](Self::historic_data), asking for XML.
    pub async fn historic_data_xml(
        &self,
        id: i64,
        average: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HistoricPoint>, CoreError> {
        self.historic_data_as(id, average, start, end, ContentKind::Xml)
            .await
    }

    async fn historic_data_as(
        &self,
        id: i64,
        average: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        format: ContentKind,
    ) -> Result<Vec<HistoricPoint>, CoreError> {
        validate_id(id)?;
        validate_average(average)?;
        validate_range(start, end)?;
        debug!(id, average, %start, %end, %format, "querying historic data");

        let payload = self
            .fetch(
                Request::new(Endpoint::HistoricData)
                    .format(format)
                    .param("id", id)
                    .param("avg", average)
                    .param("sDate", start.format(DATE_FORMAT))
                    .param("eDate", end.format(DATE_FORMAT))
                    .param("usecaption", 1),
            )
            .await?;
        let points = decode::decode_historic_data(payload.kind, &payload.body)?.points;
        non_empty(points, || format!("historic data of sensor {id}"))
    }

    // ── Sensor tree ──────────────────────────────────────────────────

    /// The object hierarchy below `id` (0 for the whole installation).
    pub async fn sensor_tree(&self, id: i64) -> Result<SensorTree, CoreError> {
        validate_id(id)?;
        debug!(id, "querying sensor tree");
        let payload = self
            .fetch(
                Request::new(Endpoint::SensorTree)
                    .param("id", id)
                    .param("content", "sensortree"),
            )
            .await?;
        Ok(decode::decode_sensor_tree(payload.kind, &payload.body)?)
    }

    async fn fetch(&self, request: Request) -> Result<Payload, CoreError> {
        Ok(self.client.fetch(&request).await?)
    }
}

// ── Validation ───────────────────────────────────────────────────────

fn validate_id(id: i64) -> Result<(), CoreError> {
    if id < 0 {
        return Err(CoreError::validation(
            "id",
            format!("must be zero or greater, got {id}"),
        ));
    }
    Ok(())
}

fn validate_average(average: i64) -> Result<(), CoreError> {
    if average < 0 {
        return Err(CoreError::validation(
            "average",
            format!("must be zero or greater, got {average}"),
        ));
    }
    Ok(())
}

/// Compared in whole seconds; exactly 31 days is allowed.
fn validate_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), CoreError> {
    let delta = end.timestamp() - start.timestamp();
    if delta < 0 {
        return Err(CoreError::validation(
            "date range",
            format!("end {end} is before start {start}"),
        ));
    }
    if delta > MAX_HISTORIC_RANGE_SECS {
        return Err(CoreError::validation(
            "date range",
            format!("{delta}s exceeds the 31 day limit"),
        ));
    }
    Ok(())
}

fn non_empty<T>(items: Vec<T>, query: impl FnOnce() -> String) -> Result<Vec<T>, CoreError> {
    if items.is_empty() {
        let query = query();
        debug!(%query, "query returned no rows");
        return Err(CoreError::EmptyResult { query });
    }
    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::error::ErrorKind;

    fn may_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert_eq!(validate_id(-1).unwrap_err().kind(), ErrorKind::Validation);
        assert!(validate_id(0).is_ok());
        assert_eq!(
            validate_average(-60).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn range_boundary_is_inclusive() {
        let start = may_first();
        assert!(validate_range(start, start).is_ok());
        assert!(validate_range(start, start + Duration::days(31)).is_ok());
        assert!(
            validate_range(start, start + Duration::days(31) + Duration::seconds(1)).is_err()
        );
        assert!(validate_range(start, start - Duration::seconds(1)).is_err());
    }

    #[test]
    fn dates_use_dashed_wire_format() {
        let at = Utc.with_ymd_and_hms(2018, 6, 1, 13, 5, 9).unwrap();
        assert_eq!(at.format(DATE_FORMAT).to_string(), "2018-06-01-13-05-09");
    }

    #[test]
    fn empty_rows_become_empty_result() {
        let err = non_empty(Vec::<TableRow>::new(), || "sensors under object 1".into())
            .unwrap_err();
        assert!(matches!(err, CoreError::EmptyResult { ref query } if query == "sensors under object 1"));
    }
}
