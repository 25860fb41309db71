pub mod anomaly;
pub mod capture;
pub mod error;
pub mod interceptor;
pub mod protocol;
pub mod scanner;
pub mod session;
pub mod traffic;
pub mod validation;

pub use anomaly::{AnomalyAnalysisRequest, AnomalyAnalysisResponse};
pub use capture::{
    ListScansRequest, LiveCaptureRequest, LiveCaptureResponse, ScanList, UploadPcapRequest,
    UploadPcapResponse,
};
pub use error::AppError;
pub use interceptor::*;
pub use protocol::{ProtocolSummaryRequest, ProtocolSummaryResponse};
pub use scanner::*;
pub use session::{Role, Session};
pub use traffic::{
    AnomalyList, ListAnomaliesRequest, ListPacketsRequest, PacketPage, ProtocolStatisticsList,
    ProtocolStatisticsRequest,
};
pub use validation::{Validate, parse_validated};
