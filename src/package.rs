use crate::types::FileDescriptor;

/// Sentinel returned when a file group is empty.
pub const UNKNOWN_PACKAGE: &str = "UNKNOWN PACKAGE";

/// Report the package name shared by a group of schema files.
///
/// Reads the first descriptor only; callers grouping files by package
/// are responsible for the all-files-agree invariant. An empty group
/// yields the `UNKNOWN PACKAGE` sentinel.
pub fn common_package(files: &[FileDescriptor]) -> String {
    files
        .first()
        .map_or_else(|| UNKNOWN_PACKAGE.to_string(), |f| f.package.clone())
}
