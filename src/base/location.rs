//! Provenance of modules: where a module (and so its declarations) comes from.
//!
//! A module is either read from a source file of a project, found in an
//! installed package of some package database, or reported by an external
//! lookup service. [`Location::id`] is the stable key used for caching and
//! deduplication across the whole crate.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Position;

// ============================================================================
// PACKAGES
// ============================================================================

/// An installed package, optionally versioned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub name: Arc<str>,
    pub version: Option<Arc<str>>,
}

impl Package {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(name: impl Into<Arc<str>>, version: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// `name-version`, or just `name` when the version is unknown.
    pub fn package_id(&self) -> String {
        match &self.version {
            Some(version) => format!("{}-{}", self.name, version),
            None => self.name.to_string(),
        }
    }
}

static VERSIONED_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w\-]+)\-([\d\.]+)").expect("valid package id pattern"));
static BARE_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w\-]+)").expect("valid package name pattern"));

/// Parse a package id such as `base-4.9.0.0` or `containers`.
///
/// Parsing is lenient: anything that does not start with a package name
/// yields `None` rather than an error.
pub fn parse_package(package_id: Option<&str>) -> Option<Package> {
    let package_id = package_id?;
    if let Some(caps) = VERSIONED_PACKAGE.captures(package_id) {
        return Some(Package::with_version(&caps[1], &caps[2]));
    }
    BARE_PACKAGE
        .captures(package_id)
        .map(|caps| Package::new(&caps[1]))
}

/// A package database: the global one, the user one or a sandbox path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageDb {
    #[default]
    Global,
    User,
    Path(Arc<str>),
}

impl PackageDb {
    /// Canonical string form: `global-db`, `user-db` or the raw path.
    pub fn as_str(&self) -> &str {
        match self {
            PackageDb::Global => "global-db",
            PackageDb::User => "user-db",
            PackageDb::Path(path) => path,
        }
    }

    /// The sandbox path, if this is not one of the shared databases.
    pub fn sandbox(&self) -> Option<&str> {
        match self {
            PackageDb::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for PackageDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageDb {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "global-db" => PackageDb::Global,
            "user-db" => PackageDb::User,
            path => PackageDb::Path(path.into()),
        })
    }
}

// ============================================================================
// LOCATIONS
// ============================================================================

/// A module read from a source file, possibly part of a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    pub filename: Option<Arc<str>>,
    pub project: Option<Arc<str>>,
}

/// A module found in an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstalledLocation {
    pub package: Package,
    pub db: PackageDb,
}

impl InstalledLocation {
    pub fn new(package: Package, db: PackageDb) -> Self {
        Self { package, db }
    }

    /// `<db>:<package-id>`
    pub fn id(&self) -> String {
        format!("{}:{}", self.db, self.package.package_id())
    }

    /// Whether the package lives in one of the shared databases.
    pub fn is_cabal(&self) -> bool {
        self.db.sandbox().is_none()
    }

    pub fn sandbox(&self) -> Option<&str> {
        self.db.sandbox()
    }
}

/// A module reported by an external source, e.g. a lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtherLocation {
    pub source: Option<Arc<str>>,
}

/// Where a module comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Source(SourceLocation),
    Installed(InstalledLocation),
    Other(OtherLocation),
}

impl Location {
    pub fn source(filename: impl Into<Arc<str>>, project: Option<&str>) -> Self {
        Location::Source(SourceLocation {
            filename: Some(filename.into()),
            project: project.map(Arc::from),
        })
    }

    pub fn installed(package: Package, db: PackageDb) -> Self {
        Location::Installed(InstalledLocation::new(package, db))
    }

    pub fn other(source: impl Into<Arc<str>>) -> Self {
        Location::Other(OtherLocation {
            source: Some(source.into()),
        })
    }

    pub fn is_null(&self) -> bool {
        match self {
            Location::Source(loc) => loc.filename.is_none() && loc.project.is_none(),
            Location::Installed(_) => false,
            Location::Other(loc) => loc.source.is_none(),
        }
    }

    /// Stable cache key, distinct per variant.
    pub fn id(&self) -> String {
        match self {
            Location::Source(loc) => loc.filename.as_deref().unwrap_or_default().to_string(),
            Location::Installed(loc) => loc.id(),
            Location::Other(loc) => format!("[{}]", loc.source.as_deref().unwrap_or_default()),
        }
    }

    pub fn is_source(&self) -> bool {
        matches!(self, Location::Source(_))
    }

    pub fn is_installed(&self) -> bool {
        matches!(self, Location::Installed(_))
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Location::Other(_))
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Location::Source(loc) => loc.filename.as_deref(),
            _ => None,
        }
    }

    pub fn project(&self) -> Option<&str> {
        match self {
            Location::Source(loc) => loc.project.as_deref(),
            _ => None,
        }
    }

    pub fn package(&self) -> Option<&Package> {
        match self {
            Location::Installed(loc) => Some(&loc.package),
            _ => None,
        }
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package().map(|p| p.name.as_ref())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Source(loc) => f.write_str(loc.filename.as_deref().unwrap_or_default()),
            Location::Installed(loc) => write!(f, "{} in {}", loc.package.package_id(), loc.db),
            Location::Other(loc) => f.write_str(loc.source.as_deref().unwrap_or_default()),
        }
    }
}

/// `<loc>:<line>:<column>`, or just `<loc>` when the position is unknown.
///
/// This is the "jump to definition" target and also the `href` of the
/// anchors emitted by the popup renderer.
pub fn source_location(loc: &Location, pos: Option<&Position>) -> String {
    match pos {
        Some(pos) => format!("{loc}:{pos}"),
        None => loc.to_string(),
    }
}
