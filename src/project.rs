//! The decoded project model.
//!
//! [`Project`] is the stable contract every downstream component reads from.
//! It is constructed once per decode and is read-only afterwards, except for
//! two seams used by enrichment stages: the target table
//! ([`Project::targets_mut`]) and the custom scheme list
//! ([`Project::custom_schemes_mut`]).
//!
//! Collections use ordered containers so equality, iteration, and re-encoding
//! are deterministic.
//!
//! # Examples
//!
//! ```
//! use projgen::project::{Project, ProjectOptions};
//! use projgen::version::SemanticVersion;
//!
//! let project = Project::builder(
//!     "App",
//!     "Debug",
//!     "//:generator".parse()?,
//!     "//:runner".parse()?,
//!     SemanticVersion::new(14, 0, 0),
//!     "/usr/bin/index-import",
//! )
//! .build()?;
//! assert_eq!(project.build_tool_path(), "bazel");
//! assert_eq!(project.options(), &ProjectOptions::default());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::label::BuildLabel;
use crate::path::FilePath;
use crate::scheme::{CustomScheme, SchemeAutogenerationMode};
use crate::target::{Target, TargetId};
use crate::version::SemanticVersion;
use miette::Diagnostic;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Values substituted when an optional field is absent from the IR.
pub mod defaults {
    use std::collections::BTreeSet;

    /// Build tool invoked when the IR does not name one.
    pub const BUILD_TOOL: &str = "bazel";
    /// Configuration used for both the configuration set and the default.
    pub const CONFIGURATION: &str = "Debug";
    /// Development region of generated projects.
    pub const DEVELOPMENT_REGION: &str = "en";
    /// Whether dependencies are linked even when not directly referenced.
    pub const FORCE_DEPENDENCY_LINKING: bool = true;

    /// The IDE configuration set used when the IR does not list one.
    #[must_use]
    pub fn ide_configurations() -> BTreeSet<String> {
        BTreeSet::from([CONFIGURATION.to_owned()])
    }
}

/// Launch arguments keyed by target.
pub type TargetArgs = BTreeMap<TargetId, Vec<String>>;
/// Launch environment keyed by target.
pub type TargetEnvs = BTreeMap<TargetId, BTreeMap<String, String>>;
/// Hosted targets keyed by the target they are embedded in.
pub type TargetHosts = BTreeMap<TargetId, Vec<TargetId>>;

/// Errors raised while constructing or enriching a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ModelError {
    /// A project must have a display name.
    #[error("project name must not be empty")]
    #[diagnostic(code(projgen::project::empty_name))]
    EmptyName,
    /// A target with this identifier is already attached.
    #[error("target `{id}` is already part of the project")]
    #[diagnostic(code(projgen::project::duplicate_target))]
    DuplicateTarget {
        /// Identifier that was inserted twice.
        id: TargetId,
    },
}

/// Stylistic defaults for the generated project files.
///
/// Absent optional values mean "inherit the IDE default".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Development region, `en` unless overridden.
    pub development_region: String,
    /// Indentation width in columns.
    pub indent_width: Option<u64>,
    /// Organization recorded in file headers.
    pub organization_name: Option<String>,
    /// Tab width in columns.
    pub tab_width: Option<u64>,
    /// Whether indentation uses tab characters.
    pub uses_tabs: Option<bool>,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            development_region: defaults::DEVELOPMENT_REGION.to_owned(),
            indent_width: None,
            organization_name: None,
            tab_width: None,
            uses_tabs: None,
        }
    }
}

/// Root of the decoded model; one per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub(crate) name: String,
    pub(crate) options: ProjectOptions,
    pub(crate) build_tool_path: String,
    pub(crate) build_config: String,
    pub(crate) ide_configurations: BTreeSet<String>,
    pub(crate) default_ide_configuration: String,
    pub(crate) generator_label: BuildLabel,
    pub(crate) runner_label: BuildLabel,
    pub(crate) minimum_tool_version: SemanticVersion,
    pub(crate) targets: BTreeMap<TargetId, Target>,
    pub(crate) target_hosts: TargetHosts,
    pub(crate) args: TargetArgs,
    pub(crate) envs: TargetEnvs,
    pub(crate) extra_files: BTreeSet<FilePath>,
    pub(crate) scheme_autogeneration_mode: SchemeAutogenerationMode,
    pub(crate) custom_schemes: Vec<CustomScheme>,
    pub(crate) force_dependency_linking: bool,
    pub(crate) index_import_path: String,
    pub(crate) pre_build_script: Option<String>,
    pub(crate) post_build_script: Option<String>,
}

impl Project {
    /// Start building a project from its required attributes. Every optional
    /// attribute starts at its default.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        build_config: impl Into<String>,
        generator_label: BuildLabel,
        runner_label: BuildLabel,
        minimum_tool_version: SemanticVersion,
        index_import_path: impl Into<String>,
    ) -> ProjectBuilder {
        ProjectBuilder {
            project: Self {
                name: name.into(),
                options: ProjectOptions::default(),
                build_tool_path: defaults::BUILD_TOOL.to_owned(),
                build_config: build_config.into(),
                ide_configurations: defaults::ide_configurations(),
                default_ide_configuration: defaults::CONFIGURATION.to_owned(),
                generator_label,
                runner_label,
                minimum_tool_version,
                targets: BTreeMap::new(),
                target_hosts: TargetHosts::new(),
                args: TargetArgs::new(),
                envs: TargetEnvs::new(),
                extra_files: BTreeSet::new(),
                scheme_autogeneration_mode: SchemeAutogenerationMode::default(),
                custom_schemes: Vec::new(),
                force_dependency_linking: defaults::FORCE_DEPENDENCY_LINKING,
                index_import_path: index_import_path.into(),
                pre_build_script: None,
                post_build_script: None,
            },
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File-generation options.
    #[must_use]
    pub const fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// Path or name of the build tool binary.
    #[must_use]
    pub fn build_tool_path(&self) -> &str {
        &self.build_tool_path
    }

    /// Named build-tool configuration to build with.
    #[must_use]
    pub fn build_config(&self) -> &str {
        &self.build_config
    }

    /// IDE configuration names.
    #[must_use]
    pub const fn ide_configurations(&self) -> &BTreeSet<String> {
        &self.ide_configurations
    }

    /// Configuration selected by default in the IDE. Not guaranteed to be a
    /// member of [`Self::ide_configurations`].
    #[must_use]
    pub fn default_ide_configuration(&self) -> &str {
        &self.default_ide_configuration
    }

    /// Label of the generator target.
    #[must_use]
    pub const fn generator_label(&self) -> &BuildLabel {
        &self.generator_label
    }

    /// Label of the runner target.
    #[must_use]
    pub const fn runner_label(&self) -> &BuildLabel {
        &self.runner_label
    }

    /// Oldest IDE version the generated project supports.
    #[must_use]
    pub const fn minimum_tool_version(&self) -> &SemanticVersion {
        &self.minimum_tool_version
    }

    /// Targets attached by enrichment stages.
    #[must_use]
    pub const fn targets(&self) -> &BTreeMap<TargetId, Target> {
        &self.targets
    }

    /// Host relationships: each key embeds the listed targets.
    #[must_use]
    pub const fn target_hosts(&self) -> &TargetHosts {
        &self.target_hosts
    }

    /// Launch arguments per target.
    #[must_use]
    pub const fn args(&self) -> &TargetArgs {
        &self.args
    }

    /// Launch environment per target.
    #[must_use]
    pub const fn envs(&self) -> &TargetEnvs {
        &self.envs
    }

    /// Files added to the project verbatim.
    #[must_use]
    pub const fn extra_files(&self) -> &BTreeSet<FilePath> {
        &self.extra_files
    }

    /// Automatic scheme creation policy.
    #[must_use]
    pub const fn scheme_autogeneration_mode(&self) -> SchemeAutogenerationMode {
        self.scheme_autogeneration_mode
    }

    /// Custom schemes attached by enrichment stages.
    #[must_use]
    pub fn custom_schemes(&self) -> &[CustomScheme] {
        &self.custom_schemes
    }

    /// Whether dependencies are force-linked.
    #[must_use]
    pub const fn force_dependency_linking(&self) -> bool {
        self.force_dependency_linking
    }

    /// Path of the index-import tool.
    #[must_use]
    pub fn index_import_path(&self) -> &str {
        &self.index_import_path
    }

    /// Script run before each build, if any.
    #[must_use]
    pub fn pre_build_script(&self) -> Option<&str> {
        self.pre_build_script.as_deref()
    }

    /// Script run after each build, if any.
    #[must_use]
    pub fn post_build_script(&self) -> Option<&str> {
        self.post_build_script.as_deref()
    }

    /// Mutable access to the target table for enrichment stages.
    pub const fn targets_mut(&mut self) -> &mut BTreeMap<TargetId, Target> {
        &mut self.targets
    }

    /// Mutable access to the custom scheme list for enrichment stages.
    pub const fn custom_schemes_mut(&mut self) -> &mut Vec<CustomScheme> {
        &mut self.custom_schemes
    }

    /// Attach a target, refusing to replace one already present.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateTarget`] when `id` is already attached;
    /// the project is left unchanged.
    pub fn insert_target(&mut self, id: TargetId, target: Target) -> Result<(), ModelError> {
        if self.targets.contains_key(&id) {
            return Err(ModelError::DuplicateTarget { id });
        }
        self.targets.insert(id, target);
        Ok(())
    }

    /// Append custom schemes in order.
    pub fn extend_custom_schemes(&mut self, schemes: impl IntoIterator<Item = CustomScheme>) {
        self.custom_schemes.extend(schemes);
    }
}

/// Builder for [`Project`] values outside the decoder, e.g. in producers and
/// tests.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    /// Replace the file-generation options.
    #[must_use]
    pub fn options(mut self, options: ProjectOptions) -> Self {
        self.project.options = options;
        self
    }

    /// Replace the build tool path.
    #[must_use]
    pub fn build_tool_path(mut self, path: impl Into<String>) -> Self {
        self.project.build_tool_path = path.into();
        self
    }

    /// Replace the IDE configuration set. An empty iterator yields an empty
    /// set.
    #[must_use]
    pub fn ide_configurations<I, S>(mut self, configurations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project.ide_configurations = configurations.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default IDE configuration.
    #[must_use]
    pub fn default_ide_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.project.default_ide_configuration = configuration.into();
        self
    }

    /// Replace the host relationships.
    #[must_use]
    pub fn target_hosts(mut self, hosts: TargetHosts) -> Self {
        self.project.target_hosts = hosts;
        self
    }

    /// Replace the launch arguments.
    #[must_use]
    pub fn args(mut self, args: TargetArgs) -> Self {
        self.project.args = args;
        self
    }

    /// Replace the launch environments.
    #[must_use]
    pub fn envs(mut self, envs: TargetEnvs) -> Self {
        self.project.envs = envs;
        self
    }

    /// Replace the extra files.
    #[must_use]
    pub fn extra_files(mut self, files: impl IntoIterator<Item = FilePath>) -> Self {
        self.project.extra_files = files.into_iter().collect();
        self
    }

    /// Replace the scheme autogeneration mode.
    #[must_use]
    pub fn scheme_autogeneration_mode(mut self, mode: SchemeAutogenerationMode) -> Self {
        self.project.scheme_autogeneration_mode = mode;
        self
    }

    /// Replace the dependency-linking policy.
    #[must_use]
    pub fn force_dependency_linking(mut self, force: bool) -> Self {
        self.project.force_dependency_linking = force;
        self
    }

    /// Set the pre-build script.
    #[must_use]
    pub fn pre_build_script(mut self, script: impl Into<String>) -> Self {
        self.project.pre_build_script = Some(script.into());
        self
    }

    /// Set the post-build script.
    #[must_use]
    pub fn post_build_script(mut self, script: impl Into<String>) -> Self {
        self.project.post_build_script = Some(script.into());
        self
    }

    /// Finish the project.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyName`] when the name is empty.
    pub fn build(self) -> Result<Project, ModelError> {
        if self.project.name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        Ok(self.project)
    }
}
