//! Fixed names and naming rules for generated query beans.
//!
//! | Entity | Root bean | Association bean |
//! |--------|-----------|------------------|
//! | `app.Country` | `app.query.QCountry` | `app.query.assoc.QAssocCountry` |

/// Base type of every root query bean.
pub const TQ_ROOT_BEAN: &str = "io.ebean.typequery.TQRootBean";
/// Base type of every association query bean.
pub const TQ_ASSOC_BEAN: &str = "io.ebean.typequery.TQAssocBean";
/// Property handle type accepted by fetch methods.
pub const TQ_PROPERTY: &str = "io.ebean.typequery.TQProperty";
/// Many-valued association support type.
pub const TQ_ASSOC_MANY: &str = "io.ebean.typequery.TQAssocMany";
/// Marker annotation placed on every generated bean.
pub const TYPE_QUERY_BEAN: &str = "io.ebean.typequery.TypeQueryBean";
/// Backing data source handle taken by the explicit root constructor.
pub const DATABASE: &str = "io.ebean.Database";
/// Named data source lookup, used when the entity has a database name.
pub const DB: &str = "io.ebean.DB";

/// Package holding the property support types (`PString`, `PEnum`, ...).
pub const SUPPORT_PACKAGE: &str = "io.ebean.typequery";

/// Sub-namespace appended to the entity namespace for root beans.
pub const QUERY_SEGMENT: &str = "query";
/// Sub-namespace appended to the root namespace for association beans.
pub const ASSOC_SEGMENT: &str = "assoc";

/// Prefix of every generated class name.
pub const BEAN_PREFIX: &str = "Q";
/// Prefix added to the short name for association beans.
pub const ASSOC_PREFIX: &str = "Assoc";

/// Free type variable of association beans standing for the caller's root bean.
pub const ROOT_TYPE_VARIABLE: &str = "R";

/// Namespace part of a fully-qualified name (empty when unqualified).
pub fn derive_namespace(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(pos) => &full_name[..pos],
        None => "",
    }
}

/// Short name part of a fully-qualified name.
pub fn derive_short_name(full_name: &str) -> &str {
    match full_name.rfind('.') {
        Some(pos) => &full_name[pos + 1..],
        None => full_name,
    }
}

/// Join a namespace and a name, tolerating an empty namespace.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Destination namespace of root beans for an entity namespace.
pub fn query_namespace(entity_namespace: &str) -> String {
    qualify(entity_namespace, QUERY_SEGMENT)
}

/// Destination namespace of association beans for a root bean namespace.
pub fn assoc_namespace(query_namespace: &str) -> String {
    qualify(query_namespace, ASSOC_SEGMENT)
}

/// Class name of the root bean, e.g. `QCountry`.
pub fn root_bean_name(short_name: &str) -> String {
    format!("{BEAN_PREFIX}{short_name}")
}

/// Short name used for the association variant, e.g. `AssocCountry`.
pub fn assoc_short_name(short_name: &str) -> String {
    format!("{ASSOC_PREFIX}{short_name}")
}

/// Class name of the association bean, e.g. `QAssocCountry`.
pub fn assoc_bean_name(short_name: &str) -> String {
    root_bean_name(&assoc_short_name(short_name))
}

/// Fully-qualified association bean name for an entity, e.g.
/// `app.Country` -> `app.query.assoc.QAssocCountry`.
pub fn assoc_bean_full_name(entity_full_name: &str) -> String {
    let namespace = assoc_namespace(&query_namespace(derive_namespace(entity_full_name)));
    qualify(&namespace, &assoc_bean_name(derive_short_name(entity_full_name)))
}

/// Fully-qualified support type name, e.g. `PString` -> `io.ebean.typequery.PString`.
pub fn support_type(simple_name: &str) -> String {
    qualify(SUPPORT_PACKAGE, simple_name)
}
