/// Core domain types for schemadoc type references and file descriptors.

/// Identifying context for one type reference site, as supplied by the
/// schema parser. All fields are dot-separated qualified names except
/// `short_name`. The resolver never derives one field from another;
/// the caller computes all five consistently.
#[derive(Debug, Clone)]
pub struct TypeRef {
    /// Fully-qualified name of the referenced type.
    pub full_name: String,
    /// Qualified name as written through the type's lexical nesting.
    /// Differs from `full_name` when the type is nested and reached
    /// via a different package path.
    pub lexical_name: String,
    /// Dotted package name of the file containing the reference.
    pub package: String,
    /// Fully-qualified name of the type lexically enclosing the
    /// reference site. Empty for top-level references.
    pub parent: String,
    /// Bare name of the referenced type.
    pub short_name: String,
}

/// Minimal view of a schema file descriptor. The parser owns the full
/// descriptor; documentation rendering only needs the package name.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    /// Dotted package name declared by the file.
    pub package: String,
}
