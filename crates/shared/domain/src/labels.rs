//! User-facing strings shared by the web UI and the shell.

pub const TITLE: &str = "실시간 병상 정보";
pub const REGION_LABEL: &str = "시도:";
pub const DISTRICT_LABEL: &str = "시군구:";
pub const SEARCH: &str = "검색";
pub const SORT_BY_BEDS: &str = "병상 수 기준 정렬";
pub const LOADING: &str = "데이터 로딩 중...";
pub const NO_RESULTS: &str = "검색 결과가 없습니다.";
pub const BEDS_LABEL: &str = "응급실 병상:";
pub const PHONE_LABEL: &str = "전화번호:";
/// Shown instead of a bed count or phone number the hospital did not report.
pub const NOT_REPORTED: &str = "정보 없음";
pub const LOAD_FAILED: &str = "데이터를 불러오는 데 실패했습니다.";
pub const NOT_CONFIGURED: &str = "서비스 키가 설정되지 않았습니다.";

/// Bed count as displayed: `0` stays `0`, only a missing report becomes [`NOT_REPORTED`].
#[must_use]
pub fn beds_text(available_beds: Option<i64>) -> String {
    available_beds.map_or_else(|| NOT_REPORTED.to_owned(), |n| n.to_string())
}
