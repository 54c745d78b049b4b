//! Upstream API constants.

/// Real-time ER bed availability endpoint of the national emergency medical center.
pub const DEFAULT_ENDPOINT: &str =
    "https://apis.data.go.kr/B552657/ErmctInfoInqireService/getEmrrmRltmUsefulSckbdInfoInqire";

/// Only the first page is ever requested.
pub const PAGE_NO: u32 = 1;
pub const NUM_OF_ROWS: u32 = 30;

pub const PARAM_STAGE1: &str = "STAGE1";
pub const PARAM_STAGE2: &str = "STAGE2";
pub const PARAM_PAGE_NO: &str = "pageNo";
pub const PARAM_NUM_OF_ROWS: &str = "numOfRows";
pub const PARAM_SERVICE_KEY: &str = "serviceKey";
/// The API answers in XML unless asked otherwise.
pub const PARAM_TYPE: &str = "_type";
pub const RESPONSE_TYPE_JSON: &str = "json";

/// `header.resultCode` of a successful upstream call.
pub const RESULT_CODE_OK: &str = "00";

/// Beds strictly above this count are plentiful.
pub const PLENTIFUL_BEDS_THRESHOLD: i64 = 5;
