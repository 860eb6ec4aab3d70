//! Server endpoint paths
//!
//! Every function returns a path relative to the server base URL. Segments
//! taken from caller input are percent-encoded. Query parameters are built
//! separately as ordered pairs so repeated keys survive.

use urlencoding::encode;

const PROJECT_SERVER: &str = "api/projectserver/v2";
const PROJECT_SERVER_V3: &str = "api/projectserver/v3";
const ONLINE_EDITOR: &str = "api/onlineeditor/v2";
const MANAGEMENT: &str = "api/management/v2";

/// Ordered query pairs
pub type Query = Vec<(String, String)>;

// ==================== Projects ====================

pub fn projects() -> String {
    format!("{PROJECT_SERVER}/projects")
}

pub fn project(project_id: &str) -> String {
    format!("{PROJECT_SERVER}/projects/{}", encode(project_id))
}

fn project_child(project_id: &str, child: &str) -> String {
    format!("{}/{child}", project(project_id))
}

pub fn project_files(project_id: &str) -> String {
    project_child(project_id, "files")
}

pub fn upload_project_files(project_id: &str) -> String {
    project_child(project_id, "files/add")
}

pub fn project_phases(project_id: &str) -> String {
    project_child(project_id, "phases")
}

pub fn project_phase_assignees(project_id: &str, phase_id: &str) -> String {
    project_child(project_id, &format!("phases/{}/assignees", encode(phase_id)))
}

pub fn change_phases(project_id: &str) -> String {
    project_child(project_id, "changephase")
}

pub fn change_assignments(project_id: &str) -> String {
    project_child(project_id, "changeassignment")
}

pub fn publishing_status(project_id: &str) -> String {
    project_child(project_id, "publishingstatus")
}

pub fn download_files(project_id: &str) -> String {
    project_child(project_id, "fileversions/download")
}

pub fn download_native(project_id: &str) -> String {
    project_child(project_id, "fileversions/downloadnative")
}

pub fn finalize(project_id: &str) -> String {
    project_child(project_id, "finalize")
}

pub fn download_file(project_id: &str, file_type: &str) -> String {
    project_child(project_id, &format!("download/{}", encode(file_type)))
}

pub fn user_assignments() -> String {
    format!("{PROJECT_SERVER}/projects/assignments")
}

pub fn project_assignments(project_id: &str) -> String {
    project_child(project_id, "assignments")
}

pub fn change_project_status(project_id: &str, status: &str) -> String {
    project_child(project_id, &format!("changestatus/{}", encode(status)))
}

pub fn detach_project(project_id: &str) -> String {
    project_child(project_id, "detach")
}

pub fn publish_package(project_id: &str) -> String {
    project_child(project_id, "publish")
}

pub fn file_statistics(project_id: &str) -> String {
    project_child(project_id, "filestatistics")
}

pub fn language_statistics(project_id: &str) -> String {
    project_child(project_id, "languagestatistics")
}

pub fn analysis_reports(project_id: &str) -> String {
    project_child(project_id, "analysisreports")
}

pub fn dashboard() -> String {
    format!("{PROJECT_SERVER}/projects/dashboard")
}

pub fn audit_trail(project_id: &str) -> String {
    project_child(project_id, "audittrail")
}

// ==================== Templates ====================

pub fn templates() -> String {
    format!("{PROJECT_SERVER}/templates")
}

pub fn template(template_id: &str) -> String {
    format!("{PROJECT_SERVER}/templates/{}", encode(template_id))
}

pub fn upload_template(template_id: &str) -> String {
    format!("{}/upload", template(template_id))
}

// ==================== File versions & editor ====================

pub fn file_versions(language_file_id: &str) -> String {
    format!(
        "{PROJECT_SERVER}/projects/fileversions/{}",
        encode(language_file_id)
    )
}

pub fn download_file_version(project_id: &str, language_file_id: &str, version: u32) -> String {
    project_child(
        project_id,
        &format!("fileversions/download/{}/{version}", encode(language_file_id)),
    )
}

pub fn project_settings(project_id: &str, language_file_id: &str) -> String {
    format!(
        "{PROJECT_SERVER_V3}/projects/{}/settings/{}",
        encode(project_id),
        encode(language_file_id)
    )
}

fn project_file(project_id: &str, language_file_id: &str, child: &str) -> String {
    project_child(
        project_id,
        &format!("files/{}/{child}", encode(language_file_id)),
    )
}

pub fn open_authorization(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "authorization")
}

pub fn editor_profile(project_id: &str, language_file_id: &str) -> String {
    format!(
        "{ONLINE_EDITOR}/projects/{}/files/{}/editorprofile",
        encode(project_id),
        encode(language_file_id)
    )
}

pub fn online_checkout(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "checkout/onlineeditor")
}

pub fn online_checkin(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "checkin/onlineeditor")
}

pub fn undo_checkout(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "undocheckout")
}

pub fn online_checkout_health() -> String {
    format!("{PROJECT_SERVER}/projects/onlinecheckout/health")
}

pub fn checked_out_to_other(language_file_id: &str) -> String {
    format!(
        "{PROJECT_SERVER}/projects/files/{}/checkedouttoother",
        encode(language_file_id)
    )
}

pub fn external_checkout(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "externalcheckout")
}

pub fn external_checkin(project_id: &str, language_file_id: &str) -> String {
    project_file(project_id, language_file_id, "externalcheckin")
}

// ==================== Permissions ====================

pub fn permissions() -> String {
    format!("{MANAGEMENT}/permissions")
}

pub fn permission_names() -> String {
    format!("{MANAGEMENT}/permissions/names")
}

// ==================== Query helpers ====================

/// One `key=value` pair per id, in order
pub fn repeated(key: &str, ids: &[String]) -> Query {
    ids.iter().map(|id| (key.to_string(), id.clone())).collect()
}

/// `languageFileIds=…` repeated for each id
pub fn language_file_id_query(ids: &[String]) -> Query {
    repeated("languageFileIds", ids)
}

/// `fileId=…` repeated for each id
pub fn file_id_query(ids: &[String]) -> Query {
    repeated("fileId", ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        assert_eq!(projects(), "api/projectserver/v2/projects");
        assert_eq!(project("p1"), "api/projectserver/v2/projects/p1");
        assert_eq!(project_files("p1"), "api/projectserver/v2/projects/p1/files");
        assert_eq!(
            project_phase_assignees("p1", "3"),
            "api/projectserver/v2/projects/p1/phases/3/assignees"
        );
        assert_eq!(
            change_project_status("p1", "Completed"),
            "api/projectserver/v2/projects/p1/changestatus/Completed"
        );
    }

    #[test]
    fn test_segments_are_encoded() {
        assert_eq!(
            project("a b/c"),
            "api/projectserver/v2/projects/a%20b%2Fc"
        );
        assert_eq!(
            file_versions("x?y"),
            "api/projectserver/v2/projects/fileversions/x%3Fy"
        );
    }

    #[test]
    fn test_file_version_paths() {
        assert_eq!(
            download_file_version("p1", "lf1", 4),
            "api/projectserver/v2/projects/p1/fileversions/download/lf1/4"
        );
        assert_eq!(
            project_settings("p1", "lf1"),
            "api/projectserver/v3/projects/p1/settings/lf1"
        );
        assert_eq!(
            editor_profile("p1", "lf1"),
            "api/onlineeditor/v2/projects/p1/files/lf1/editorprofile"
        );
        assert_eq!(
            online_checkin("p1", "lf1"),
            "api/projectserver/v2/projects/p1/files/lf1/checkin/onlineeditor"
        );
    }

    #[test]
    fn test_template_and_permission_paths() {
        assert_eq!(templates(), "api/projectserver/v2/templates");
        assert_eq!(upload_template("t1"), "api/projectserver/v2/templates/t1/upload");
        assert_eq!(permissions(), "api/management/v2/permissions");
        assert_eq!(permission_names(), "api/management/v2/permissions/names");
    }

    #[test]
    fn test_language_file_id_query() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            language_file_id_query(&ids),
            vec![
                ("languageFileIds".to_string(), "a".to_string()),
                ("languageFileIds".to_string(), "b".to_string()),
            ]
        );
        assert!(file_id_query(&[]).is_empty());
    }
}
