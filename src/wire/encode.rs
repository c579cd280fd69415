//! Reference encoder producing the compact IR form.
//!
//! Fields are written in tag-table order and omitted exactly when they hold
//! their default value, so `decode(encode(p)) == p` for any project whose
//! enrichment seams are empty.

use super::schema::{Field, file_path, project, project_options};
use super::value::WireValue;
use crate::label::BuildLabel;
use crate::path::{FileKind, FilePath};
use crate::project::{Project, ProjectOptions, defaults};
use crate::scheme::SchemeAutogenerationMode;
use crate::target::TargetId;
use crate::version::SemanticVersion;
use std::collections::{BTreeMap, BTreeSet};

/// A value with a wire representation.
pub(super) trait Encode {
    fn encode(&self) -> WireValue;
}

/// A value usable as an object key.
pub(super) trait EncodeKey {
    fn encode_key(&self) -> String;
}

#[derive(Default)]
struct ObjectBuilder(Vec<(String, WireValue)>);

impl ObjectBuilder {
    fn put(&mut self, field: Field, value: &impl Encode) {
        self.0.push((field.tag.to_owned(), value.encode()));
    }

    fn put_unless_default<T: Encode + PartialEq>(&mut self, field: Field, value: &T, default: &T) {
        if value != default {
            self.put(field, value);
        }
    }

    fn put_some<T: Encode>(&mut self, field: Field, value: Option<&T>) {
        if let Some(present) = value {
            self.put(field, present);
        }
    }

    fn finish(self) -> WireValue {
        WireValue::Object(self.0)
    }
}

impl Encode for String {
    fn encode(&self) -> WireValue {
        WireValue::String(self.clone())
    }
}

impl Encode for bool {
    fn encode(&self) -> WireValue {
        WireValue::Bool(*self)
    }
}

impl Encode for u64 {
    fn encode(&self) -> WireValue {
        WireValue::from(*self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> WireValue {
        WireValue::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self) -> WireValue {
        WireValue::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<K: EncodeKey, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self) -> WireValue {
        WireValue::Object(
            self.iter()
                .map(|(key, value)| (key.encode_key(), value.encode()))
                .collect(),
        )
    }
}

impl EncodeKey for String {
    fn encode_key(&self) -> String {
        self.clone()
    }
}

impl EncodeKey for TargetId {
    fn encode_key(&self) -> String {
        self.as_str().to_owned()
    }
}

impl Encode for TargetId {
    fn encode(&self) -> WireValue {
        WireValue::from(self.as_str())
    }
}

impl Encode for BuildLabel {
    fn encode(&self) -> WireValue {
        WireValue::String(self.to_string())
    }
}

impl Encode for SemanticVersion {
    fn encode(&self) -> WireValue {
        WireValue::String(self.to_string())
    }
}

impl Encode for SchemeAutogenerationMode {
    fn encode(&self) -> WireValue {
        WireValue::from(self.as_wire_str())
    }
}

impl Encode for FileKind {
    fn encode(&self) -> WireValue {
        WireValue::from(self.as_wire_str())
    }
}

impl Encode for FilePath {
    fn encode(&self) -> WireValue {
        let path = self.path().as_str().to_owned();
        if self.kind() == FileKind::Project && !self.is_folder() {
            return WireValue::String(path);
        }
        let mut object = ObjectBuilder::default();
        object.put(file_path::PATH, &path);
        object.put_unless_default(file_path::KIND, &self.kind(), &FileKind::Project);
        object.put_unless_default(file_path::IS_FOLDER, &self.is_folder(), &false);
        object.finish()
    }
}

impl Encode for ProjectOptions {
    fn encode(&self) -> WireValue {
        let mut object = ObjectBuilder::default();
        object.put_unless_default(
            project_options::DEVELOPMENT_REGION,
            &self.development_region,
            &defaults::DEVELOPMENT_REGION.to_owned(),
        );
        object.put_some(project_options::INDENT_WIDTH, self.indent_width.as_ref());
        object.put_some(
            project_options::ORGANIZATION_NAME,
            self.organization_name.as_ref(),
        );
        object.put_some(project_options::TAB_WIDTH, self.tab_width.as_ref());
        object.put_some(project_options::USES_TABS, self.uses_tabs.as_ref());
        object.finish()
    }
}

/// Encode the root container.
pub(super) fn encode_project(project: &Project) -> WireValue {
    let mut object = ObjectBuilder::default();
    object.put(project::NAME, &project.name);
    object.put_unless_default(project::OPTIONS, &project.options, &ProjectOptions::default());
    object.put_unless_default(
        project::BUILD_TOOL_PATH,
        &project.build_tool_path,
        &defaults::BUILD_TOOL.to_owned(),
    );
    object.put(project::BUILD_CONFIG, &project.build_config);
    object.put_unless_default(
        project::IDE_CONFIGURATIONS,
        &project.ide_configurations,
        &defaults::ide_configurations(),
    );
    object.put_unless_default(
        project::DEFAULT_IDE_CONFIGURATION,
        &project.default_ide_configuration,
        &defaults::CONFIGURATION.to_owned(),
    );
    object.put(project::GENERATOR_LABEL, &project.generator_label);
    object.put(project::RUNNER_LABEL, &project.runner_label);
    object.put(project::MINIMUM_TOOL_VERSION, &project.minimum_tool_version);
    object.put_unless_default(project::TARGET_HOSTS, &project.target_hosts, &BTreeMap::new());
    object.put_unless_default(project::ENVS, &project.envs, &BTreeMap::new());
    object.put_unless_default(project::ARGS, &project.args, &BTreeMap::new());
    object.put_unless_default(project::EXTRA_FILES, &project.extra_files, &BTreeSet::new());
    object.put_unless_default(
        project::SCHEME_AUTOGENERATION_MODE,
        &project.scheme_autogeneration_mode,
        &SchemeAutogenerationMode::default(),
    );
    object.put_unless_default(
        project::FORCE_DEPENDENCY_LINKING,
        &project.force_dependency_linking,
        &defaults::FORCE_DEPENDENCY_LINKING,
    );
    object.put(project::INDEX_IMPORT_PATH, &project.index_import_path);
    object.put_some(project::PRE_BUILD_SCRIPT, project.pre_build_script.as_ref());
    object.put_some(project::POST_BUILD_SCRIPT, project.post_build_script.as_ref());
    object.finish()
}
