//! Data-transfer records mirroring server resources
//!
//! Each record is a snapshot received from or sent to the server. Nothing
//! here is validated locally; required-argument checks live in `ensure`.

mod file_version;
mod permission;
mod project;
mod template;

pub use file_version::{EditorProfile, FileVersion, OnlineCheckout, ProjectSettings};
pub use permission::{Permission, PermissionName};
pub use project::{
    AnalysisReport, AnalysisReportHtml, AuditTrailEntry, ChangeAssignmentRequest,
    ChangePhaseRequest, ChangeStatusRequest, CreateProjectRequest, Dashboard, File,
    FileDownloadRequest, FileDownloadType, LanguageStatistics, Phase, PhaseAssignee,
    PhaseWithAssignees, Project, ProjectAssignment, ProjectDetails, ProjectFileStatistics,
    ProjectFilter, ProjectStatistics, ProjectStatus, ProjectsRequest, PublishingStatus,
    SortDirection, SortParameters, SortProperty, UserAssignment,
};
pub use template::ProjectTemplate;

/// Parse a server timestamp
///
/// The server emits RFC 3339 with an offset in newer versions and naive
/// datetimes (assumed UTC) in older ones.
pub fn parse_timestamp(value: &str) -> Option<jiff::Timestamp> {
    if let Ok(ts) = value.parse::<jiff::Timestamp>() {
        return Some(ts);
    }
    let civil = value.parse::<jiff::civil::DateTime>().ok()?;
    civil
        .to_zoned(jiff::tz::TimeZone::UTC)
        .ok()
        .map(|z| z.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_with_offset() {
        let ts = parse_timestamp("2026-03-01T10:00:00Z").unwrap();
        assert_eq!(ts.as_second(), 1772359200);
    }

    #[test]
    fn test_parse_timestamp_naive_is_utc() {
        let naive = parse_timestamp("2026-03-01T10:00:00").unwrap();
        let utc = parse_timestamp("2026-03-01T10:00:00Z").unwrap();
        assert_eq!(naive, utc);
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert!(parse_timestamp("next tuesday").is_none());
    }
}
