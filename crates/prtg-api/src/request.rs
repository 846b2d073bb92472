// Request description for the PRTG API
//
// A `Request` names the endpoint family, the format to ask for, and the
// endpoint-specific query parameters. Credentials are added by the client
// when the URL is built, so a `Request` never holds secret material and is
// safe to log.

use crate::content::ContentKind;

/// The PRTG API endpoint families this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `getsensordetails` -- one sensor's detail record (also carries the server version).
    SensorDetails,
    /// `table` -- sensor, device or group lists selected by `content=`.
    TableList,
    /// `historicdata` -- time-bucketed channel values for one sensor.
    HistoricData,
    /// `table` with `content=sensortree` -- the object hierarchy. XML only.
    SensorTree,
}

impl Endpoint {
    /// The request path for this endpoint in the given format.
    ///
    /// The sensor tree is only served as XML, so its path ignores `format`.
    pub fn path(self, format: ContentKind) -> &'static str {
        match (self, format) {
            (Self::SensorDetails, ContentKind::Json) => "/api/getsensordetails.json",
            (Self::SensorDetails, ContentKind::Xml) => "/api/getsensordetails.xml",
            (Self::TableList, ContentKind::Json) => "/api/table.json",
            (Self::TableList, ContentKind::Xml) | (Self::SensorTree, _) => "/api/table.xml",
            (Self::HistoricData, ContentKind::Json) => "/api/historicdata.json",
            (Self::HistoricData, ContentKind::Xml) => "/api/historicdata.xml",
        }
    }

    /// The format requested when the caller doesn't pick one.
    pub fn default_format(self) -> ContentKind {
        match self {
            Self::SensorTree => ContentKind::Xml,
            _ => ContentKind::Json,
        }
    }
}

/// One GET request against the PRTG API, minus credentials.
#[derive(Debug, Clone)]
pub struct Request {
    endpoint: Endpoint,
    format: ContentKind,
    params: Vec<(&'static str, String)>,
}

impl Request {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            format: endpoint.default_format(),
            params: Vec::new(),
        }
    }

    /// Ask for a specific response format.
    pub fn format(mut self, format: ContentKind) -> Self {
        self.format = format;
        self
    }

    /// Append a query parameter.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn requested_format(&self) -> ContentKind {
        self.format
    }

    pub fn path(&self) -> &'static str {
        self.endpoint.path(self.format)
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}
