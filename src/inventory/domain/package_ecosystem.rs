use std::fmt;
use std::str::FromStr;

/// Package ecosystem or package manager that reported a package.
///
/// Every variant has a lowercase wire value. Parsing is case-insensitive and
/// never fails: unrecognised input maps to [`PackageEcosystem::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PackageEcosystem {
    // Language package managers
    Maven,
    Gradle,
    Npm,
    Pip,
    RubyGems,
    Cargo,
    NuGet,

    // OS package managers
    Deb,
    Apt,
    Rpm,
    Yum,
    Dnf,
    Apk,
    Chocolatey,
    Winget,
    Pacman,

    // Platform stores and installers
    Homebrew,
    MacPkg,
    Msi,
    Snap,
    Flatpak,

    // Container images
    Docker,
    Oci,

    /// File-based or unknown source
    Generic,
}

impl PackageEcosystem {
    pub const ALL: [PackageEcosystem; 24] = [
        PackageEcosystem::Maven,
        PackageEcosystem::Gradle,
        PackageEcosystem::Npm,
        PackageEcosystem::Pip,
        PackageEcosystem::RubyGems,
        PackageEcosystem::Cargo,
        PackageEcosystem::NuGet,
        PackageEcosystem::Deb,
        PackageEcosystem::Apt,
        PackageEcosystem::Rpm,
        PackageEcosystem::Yum,
        PackageEcosystem::Dnf,
        PackageEcosystem::Apk,
        PackageEcosystem::Chocolatey,
        PackageEcosystem::Winget,
        PackageEcosystem::Pacman,
        PackageEcosystem::Homebrew,
        PackageEcosystem::MacPkg,
        PackageEcosystem::Msi,
        PackageEcosystem::Snap,
        PackageEcosystem::Flatpak,
        PackageEcosystem::Docker,
        PackageEcosystem::Oci,
        PackageEcosystem::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageEcosystem::Maven => "maven",
            PackageEcosystem::Gradle => "gradle",
            PackageEcosystem::Npm => "npm",
            PackageEcosystem::Pip => "pip",
            PackageEcosystem::RubyGems => "rubygems",
            PackageEcosystem::Cargo => "cargo",
            PackageEcosystem::NuGet => "nuget",
            PackageEcosystem::Deb => "deb",
            PackageEcosystem::Apt => "apt",
            PackageEcosystem::Rpm => "rpm",
            PackageEcosystem::Yum => "yum",
            PackageEcosystem::Dnf => "dnf",
            PackageEcosystem::Apk => "apk",
            PackageEcosystem::Chocolatey => "chocolatey",
            PackageEcosystem::Winget => "winget",
            PackageEcosystem::Pacman => "pacman",
            PackageEcosystem::Homebrew => "homebrew",
            PackageEcosystem::MacPkg => "macpkg",
            PackageEcosystem::Msi => "msi",
            PackageEcosystem::Snap => "snap",
            PackageEcosystem::Flatpak => "flatpak",
            PackageEcosystem::Docker => "docker",
            PackageEcosystem::Oci => "oci",
            PackageEcosystem::Generic => "generic",
        }
    }

    /// Lenient conversion used at the scan boundary.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|ecosystem| ecosystem.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or(PackageEcosystem::Generic)
    }
}

impl FromStr for PackageEcosystem {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_value(s))
    }
}

impl fmt::Display for PackageEcosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("deb", PackageEcosystem::Deb)]
    #[case("NPM", PackageEcosystem::Npm)]
    #[case("RubyGems", PackageEcosystem::RubyGems)]
    #[case(" pacman ", PackageEcosystem::Pacman)]
    #[case("unknown-manager", PackageEcosystem::Generic)]
    #[case("", PackageEcosystem::Generic)]
    fn test_from_value(#[case] input: &str, #[case] expected: PackageEcosystem) {
        assert_eq!(PackageEcosystem::from_value(input), expected);
    }

    #[test]
    fn test_wire_values_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for ecosystem in PackageEcosystem::ALL {
            let value = ecosystem.as_str();
            assert_eq!(value, value.to_lowercase());
            assert!(seen.insert(value), "duplicate wire value {}", value);
            assert_eq!(PackageEcosystem::from_value(value), ecosystem);
        }
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(PackageEcosystem::Homebrew.to_string(), "homebrew");
    }
}
