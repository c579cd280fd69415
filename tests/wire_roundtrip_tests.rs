//! Property tests: any project the model can hold survives an encode and
//! decode cycle unchanged.
//!
//! Generated projects cover canonical (`@@`) and root-package labels,
//! versions with pre-release and build suffixes, every file kind with and
//! without the folder flag, empty and populated IDE configuration sets, and
//! every combination of the optional project options.

use projgen::label::BuildLabel;
use projgen::path::{FileKind, FilePath};
use projgen::project::{Project, ProjectOptions, TargetArgs, TargetEnvs, TargetHosts};
use projgen::scheme::SchemeAutogenerationMode;
use projgen::target::TargetId;
use projgen::version::SemanticVersion;
use projgen::wire;
use proptest::collection::{btree_map, btree_set, vec};
use proptest::option;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = BuildLabel> {
    let repository = prop_oneof![
        Just(String::new()),
        Just(String::from("@")),
        "@?[A-Za-z0-9_.~+-]{1,10}".prop_map(|repo| format!("@{repo}")),
    ];
    let package = vec("[a-z][a-z0-9_.-]{0,6}", 0..4).prop_map(|segments| segments.join("/"));
    let name = option::of("[A-Za-z][A-Za-z0-9_.+-]{0,8}");
    (repository, package, name).prop_filter_map(
        "the root package needs an explicit name",
        |(repository, package, name)| {
            let text = match name {
                Some(name) => format!("{repository}//{package}:{name}"),
                None if package.is_empty() => return None,
                None => format!("{repository}//{package}"),
            };
            text.parse().ok()
        },
    )
}

fn version() -> impl Strategy<Value = SemanticVersion> {
    let pre = option::of(vec("[a-z][a-z0-9]{0,4}|[1-9][0-9]{0,3}", 1..3));
    let build = option::of(vec("[A-Za-z0-9]{1,5}", 1..3));
    (0_u64..100, 0_u64..100, 0_u64..100, pre, build).prop_filter_map(
        "generated versions are valid",
        |(major, minor, patch, pre, build)| {
            let mut text = format!("{major}.{minor}.{patch}");
            if let Some(pre) = pre {
                text.push('-');
                text.push_str(&pre.join("."));
            }
            if let Some(build) = build {
                text.push('+');
                text.push_str(&build.join("."));
            }
            text.parse().ok()
        },
    )
}

fn target_id() -> impl Strategy<Value = TargetId> {
    "[A-Za-z0-9/:@_.-]{1,16}".prop_filter_map("target ids are non-empty", |text| {
        TargetId::new(text).ok()
    })
}

fn file_path() -> impl Strategy<Value = FilePath> {
    let kind = prop_oneof![
        Just(FileKind::Project),
        Just(FileKind::External),
        Just(FileKind::Generated),
        Just(FileKind::Internal),
    ];
    let path = vec("[A-Za-z0-9_-][A-Za-z0-9_.-]{0,7}", 1..4).prop_map(|segments| segments.join("/"));
    (kind, path, any::<bool>()).prop_map(|(kind, path, is_folder)| {
        let file = FilePath::new(kind, path);
        if is_folder { file.folder() } else { file }
    })
}

fn options() -> impl Strategy<Value = ProjectOptions> {
    (
        prop_oneof![Just(String::from("en")), "[a-z]{2}(-[A-Z]{2})?"],
        option::of(any::<u64>()),
        option::of("[A-Za-z0-9 ,.]{0,16}"),
        option::of(any::<u64>()),
        option::of(any::<bool>()),
    )
        .prop_map(
            |(development_region, indent_width, organization_name, tab_width, uses_tabs)| {
                ProjectOptions {
                    development_region,
                    indent_width,
                    organization_name,
                    tab_width,
                    uses_tabs,
                }
            },
        )
}

fn scheme_mode() -> impl Strategy<Value = SchemeAutogenerationMode> {
    prop_oneof![
        Just(SchemeAutogenerationMode::Auto),
        Just(SchemeAutogenerationMode::Disabled),
        Just(SchemeAutogenerationMode::All),
    ]
}

fn per_target() -> impl Strategy<Value = (TargetHosts, TargetArgs, TargetEnvs)> {
    (
        btree_map(target_id(), vec(target_id(), 0..3), 0..3),
        btree_map(target_id(), vec(".{0,12}", 0..3), 0..3),
        btree_map(
            target_id(),
            btree_map("[A-Z_]{1,10}", ".{0,12}", 0..3),
            0..3,
        ),
    )
}

prop_compose! {
    fn project()(
        required in (
            ".{1,16}",
            ".{0,12}",
            label(),
            label(),
            version(),
            ".{0,24}",
        ),
        project_options in options(),
        build_tool_path in option::of(".{0,24}"),
        ide_configurations in option::of(btree_set("[A-Za-z]{1,8}", 0..4)),
        default_ide_configuration in option::of("[A-Za-z]{1,8}"),
        per_target in per_target(),
        extra_files in btree_set(file_path(), 0..5),
        mode in scheme_mode(),
        force_dependency_linking in any::<bool>(),
        scripts in (option::of(".{0,24}"), option::of(".{0,24}"))
    ) -> Project {
        let (name, build_config, generator, runner, minimum, index_import) = required;
        let (hosts, args, envs) = per_target;
        let mut builder = Project::builder(name, build_config, generator, runner, minimum, index_import)
            .options(project_options)
            .target_hosts(hosts)
            .args(args)
            .envs(envs)
            .extra_files(extra_files)
            .scheme_autogeneration_mode(mode)
            .force_dependency_linking(force_dependency_linking);
        if let Some(path) = build_tool_path {
            builder = builder.build_tool_path(path);
        }
        if let Some(configurations) = ide_configurations {
            builder = builder.ide_configurations(configurations);
        }
        if let Some(configuration) = default_ide_configuration {
            builder = builder.default_ide_configuration(configuration);
        }
        if let Some(script) = scripts.0 {
            builder = builder.pre_build_script(script);
        }
        if let Some(script) = scripts.1 {
            builder = builder.post_build_script(script);
        }
        match builder.build() {
            Ok(project) => project,
            Err(err) => panic!("generated project is valid: {err}"),
        }
    }
}

proptest! {
    #[test]
    fn encoded_projects_decode_to_themselves(project in project()) {
        let bytes = wire::encode(&project)?;
        prop_assert_eq!(wire::decode(&bytes)?, project);
    }

    #[test]
    fn pretty_and_compact_encodings_agree(project in project()) {
        let compact = wire::decode(&wire::encode(&project)?)?;
        let pretty = wire::decode(&wire::encode_pretty(&project)?)?;
        prop_assert_eq!(compact, pretty);
    }

    #[test]
    fn labels_survive_display_and_parse(label in label()) {
        let reparsed: BuildLabel = label.to_string().parse()?;
        prop_assert_eq!(reparsed, label);
    }
}
