//! The IR tag table.
//!
//! Every field is addressed on the wire by a one- or two-character tag. This
//! table is the single place those spellings live; the decoder and encoder
//! both read it. Changing a tag here is a breaking wire-format change.

/// A logical field and its wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name used in diagnostics.
    pub name: &'static str,
    /// Key used on the wire.
    pub tag: &'static str,
}

impl Field {
    const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// Tags of the root project container.
pub mod project {
    use super::Field;

    /// Display name. Required.
    pub const NAME: Field = Field::new("name", "n");
    /// Nested file-generation options.
    pub const OPTIONS: Field = Field::new("options", "o");
    /// Build tool binary.
    pub const BUILD_TOOL_PATH: Field = Field::new("buildToolPath", "b");
    /// Named build configuration. Required.
    pub const BUILD_CONFIG: Field = Field::new("buildConfig", "B");
    /// IDE configuration set.
    pub const IDE_CONFIGURATIONS: Field = Field::new("ideConfigurations", "x");
    /// Default IDE configuration.
    pub const DEFAULT_IDE_CONFIGURATION: Field = Field::new("defaultIdeConfiguration", "d");
    /// Generator label. Required.
    pub const GENERATOR_LABEL: Field = Field::new("generatorLabel", "g");
    /// Runner label. Required.
    pub const RUNNER_LABEL: Field = Field::new("runnerLabel", "R");
    /// Minimum tool version. Required.
    pub const MINIMUM_TOOL_VERSION: Field = Field::new("minimumToolVersion", "m");
    /// Host relationships.
    pub const TARGET_HOSTS: Field = Field::new("targetHosts", "t");
    /// Launch environments.
    pub const ENVS: Field = Field::new("envs", "E");
    /// Launch arguments.
    pub const ARGS: Field = Field::new("args", "a");
    /// Extra files.
    pub const EXTRA_FILES: Field = Field::new("extraFiles", "e");
    /// Scheme autogeneration mode.
    pub const SCHEME_AUTOGENERATION_MODE: Field = Field::new("schemeAutogenerationMode", "s");
    /// Dependency-linking policy.
    pub const FORCE_DEPENDENCY_LINKING: Field = Field::new("forceDependencyLinking", "f");
    /// Index-import tool path. Required.
    pub const INDEX_IMPORT_PATH: Field = Field::new("indexImportPath", "i");
    /// Pre-build script.
    pub const PRE_BUILD_SCRIPT: Field = Field::new("preBuildScript", "p");
    /// Post-build script.
    pub const POST_BUILD_SCRIPT: Field = Field::new("postBuildScript", "P");

    /// Every project field in wire order.
    pub const ALL: &[Field] = &[
        NAME,
        OPTIONS,
        BUILD_TOOL_PATH,
        BUILD_CONFIG,
        IDE_CONFIGURATIONS,
        DEFAULT_IDE_CONFIGURATION,
        GENERATOR_LABEL,
        RUNNER_LABEL,
        MINIMUM_TOOL_VERSION,
        TARGET_HOSTS,
        ENVS,
        ARGS,
        EXTRA_FILES,
        SCHEME_AUTOGENERATION_MODE,
        FORCE_DEPENDENCY_LINKING,
        INDEX_IMPORT_PATH,
        PRE_BUILD_SCRIPT,
        POST_BUILD_SCRIPT,
    ];
}

/// Tags of the nested options container.
pub mod project_options {
    use super::Field;

    /// Development region.
    pub const DEVELOPMENT_REGION: Field = Field::new("developmentRegion", "d");
    /// Indent width.
    pub const INDENT_WIDTH: Field = Field::new("indentWidth", "i");
    /// Organization name.
    pub const ORGANIZATION_NAME: Field = Field::new("organizationName", "o");
    /// Tab width.
    pub const TAB_WIDTH: Field = Field::new("tabWidth", "t");
    /// Tab usage.
    pub const USES_TABS: Field = Field::new("usesTabs", "u");

    /// Every options field in wire order.
    pub const ALL: &[Field] = &[
        DEVELOPMENT_REGION,
        INDENT_WIDTH,
        ORGANIZATION_NAME,
        TAB_WIDTH,
        USES_TABS,
    ];
}

/// Tags of the object form of a file path.
pub mod file_path {
    use super::Field;

    /// Path text. Required in the object form.
    pub const PATH: Field = Field::new("path", "_");
    /// Root kind, one of `p`, `e`, `g`, `i`.
    pub const KIND: Field = Field::new("kind", "t");
    /// Folder-reference flag.
    pub const IS_FOLDER: Field = Field::new("isFolder", "f");

    /// Every file path field in wire order.
    pub const ALL: &[Field] = &[PATH, KIND, IS_FOLDER];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(project::ALL)]
    #[case(project_options::ALL)]
    #[case(file_path::ALL)]
    fn tags_and_names_are_unique(#[case] fields: &[Field]) {
        let tags: BTreeSet<&str> = fields.iter().map(|f| f.tag).collect();
        let names: BTreeSet<&str> = fields.iter().map(|f| f.name).collect();
        assert_eq!(tags.len(), fields.len());
        assert_eq!(names.len(), fields.len());
    }

    #[test]
    fn project_tags_match_published_table() {
        let table: Vec<(&str, &str)> = project::ALL.iter().map(|f| (f.name, f.tag)).collect();
        assert_eq!(
            table,
            [
                ("name", "n"),
                ("options", "o"),
                ("buildToolPath", "b"),
                ("buildConfig", "B"),
                ("ideConfigurations", "x"),
                ("defaultIdeConfiguration", "d"),
                ("generatorLabel", "g"),
                ("runnerLabel", "R"),
                ("minimumToolVersion", "m"),
                ("targetHosts", "t"),
                ("envs", "E"),
                ("args", "a"),
                ("extraFiles", "e"),
                ("schemeAutogenerationMode", "s"),
                ("forceDependencyLinking", "f"),
                ("indexImportPath", "i"),
                ("preBuildScript", "p"),
                ("postBuildScript", "P"),
            ]
        );
    }

    #[test]
    fn option_tags_match_published_table() {
        let tags: Vec<&str> = project_options::ALL.iter().map(|f| f.tag).collect();
        assert_eq!(tags, ["d", "i", "o", "t", "u"]);
    }
}
