use crate::types::TypeRef;

/// Computes the hyperlink target for one type reference in rendered
/// documentation.
///
/// Holds the namespace-root marker that classifies qualified names as
/// internal (linkable within the doc set) or external. The marker is
/// configuration, not a constant, so the resolver works across
/// differently-named schema universes.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    /// Namespace prefix marking a qualified name as internal,
    /// e.g. `"root.pkgfamily."`.
    namespace_root: String,
}

impl LinkResolver {
    /// Create a resolver for the given internal-root marker.
    pub fn new(namespace_root: impl Into<String>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
        }
    }

    /// Resolve a type reference to a same-page anchor or a relative
    /// page path with anchor.
    ///
    /// The branches are ordered by precedence and the first match
    /// wins. Inputs are assumed well-formed dotted names; malformed
    /// input produces a malformed link rather than an error.
    pub fn resolve(&self, reference: &TypeRef) -> String {
        let TypeRef {
            full_name,
            lexical_name,
            package,
            parent,
            short_name,
        } = reference;

        // Outside the documented universe: no page exists, so emit a
        // bare fragment that marks the type as external.
        if !full_name.contains(&self.namespace_root) {
            return format!("#{full_name}");
        }

        // Top-level type in the package currently being rendered.
        let in_current_package = format!("{package}.{short_name}") == *full_name;
        if in_current_package {
            return format!("#{full_name}");
        }

        // Nested directly inside the same enclosing type as the
        // reference site. Nested types render on their parent's page.
        let is_nested_sibling = format!("{parent}.{short_name}") == *full_name;
        if is_nested_sibling {
            return format!("#{full_name}");
        }

        // Same package, but reached through its lexical nesting path.
        // Link to the enclosing type's page, anchored at the type.
        let in_current_package_nested = format!("{package}.{lexical_name}") == *full_name;
        if in_current_package_nested {
            let outer = lexical_name
                .strip_suffix(&format!(".{short_name}"))
                .unwrap_or(lexical_name);
            let outer_path = outer.replace('.', "/");
            return format!("{outer_path}/index.html#{full_name}");
        }

        // Cross-package: link from the doc root to the owning
        // package's index page. The final segment is the type's own
        // short name and is dropped to get the package directory.
        let relative = full_name
            .strip_prefix(&self.namespace_root)
            .unwrap_or(full_name);
        let path = relative.replace('.', "/");
        // A single-segment path has no package directory left; "." is
        // its parent, same as any path-dirname convention.
        let directory = path.rsplit_once('/').map_or(".", |(dir, _)| dir);
        format!("/{directory}/index.html#{full_name}")
    }
}
