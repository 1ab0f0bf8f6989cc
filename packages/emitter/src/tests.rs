use crate::*;
use autoface_classifier::{ForwardingAccess, InterfaceAccess, TypeResolver};
use autoface_model::*;

const TASKS: &str = "System.Threading.Tasks";

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn int() -> TypeRef {
    TypeRef::named(Some("System"), "int")
}

fn string() -> TypeRef {
    TypeRef::named(Some("System"), "string")
}

fn unit_type() -> ResolvedType {
    ResolvedType {
        namespace: Some("Sample".to_string()),
        name: "Unit".to_string(),
        kind: TypeKind::Struct,
        accessibility: Accessibility::Public,
        type_parameters: vec![],
        members: vec![],
        docs: None,
    }
}

fn source_type() -> ResolvedType {
    let mut obsolete = ResolvedMethod::new("ObsTest", int());
    obsolete.obsolete = true;

    let mut excluded = ResolvedProperty::new("Secret", string());
    excluded.excluded = true;

    ResolvedType {
        namespace: Some("Sample".to_string()),
        name: "FromInstanceMembersSource".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![],
        members: vec![
            ResolvedMember::Property(ResolvedProperty::new("Number1", int())),
            ResolvedMember::Property(
                ResolvedProperty::new("Number2", int())
                    .with_getter(None)
                    .with_setter(Some(Accessibility::Public)),
            ),
            ResolvedMember::Property(
                ResolvedProperty::new("Number3", int()).with_setter(Some(Accessibility::Public)),
            ),
            ResolvedMember::Method(ResolvedMethod::new("DoSomething", TypeRef::Void)),
            ResolvedMember::Method(
                ResolvedMethod::new("GetSomething", int())
                    .with_parameter(Parameter::new("str", string())),
            ),
            ResolvedMember::Method(ResolvedMethod::new(
                "GetNumberAsync",
                TypeRef::generic(Some(TASKS), "Task", vec![int()]),
            )),
            ResolvedMember::Method(ResolvedMethod::new(
                "DoSomethingAsync",
                TypeRef::named(Some(TASKS), "Task"),
            )),
            ResolvedMember::Method(obsolete),
            ResolvedMember::Property(excluded),
            ResolvedMember::Method(ResolvedMethod::new("Create", int()).into_static()),
        ],
        docs: None,
    }
}

fn catalog() -> TypeCatalog {
    TypeCatalog::from_types(vec![source_type(), unit_type()])
}

fn instance_request() -> SynthesisRequest {
    SynthesisRequest::instance(
        "Sample.FromInstanceMembersSource",
        TargetSpec::new(Some("Sample"), "IFromInstanceMembers"),
    )
}

fn run(resolver: &dyn TypeResolver, request: &SynthesisRequest) -> GeneratedSource {
    let shapes = WellKnownAwaitables::new();
    let result = generate(resolver, &shapes, request).expect("Failed to generate");
    println!("Generated code:\n{}", result.text);
    result
}

#[test]
fn test_forwarding_with_unit_substitution() {
    let request = instance_request().implemented().with_unit_type("Sample.Unit");
    let result = run(&catalog(), &request);

    let expected = "\
#nullable enable

using Sample;
using System;
using System.Threading.Tasks;

namespace Sample;

partial interface IFromInstanceMembers
{
    protected FromInstanceMembersSource Instance { get; }

    int Number1 => Instance.Number1;

    int Number2 { set; }

    int Number3
    {
        get => Instance.Number3;
        set => Instance.Number3 = value;
    }

    Unit DoSomething()
    {
        Instance.DoSomething();
        return default;
    }

    int GetSomething(string str) => Instance.GetSomething(str);

    Task<int> GetNumberAsync() => Instance.GetNumberAsync();

    async Task<Unit> DoSomethingAsync()
    {
        await Instance.DoSomethingAsync();
        return default;
    }
}
";
    assert_eq!(result.text, expected);
    assert_eq!(result.hint_name, "Sample.IFromInstanceMembers.AutoInterface.g.cs");
}

#[test]
fn test_declarations_only() {
    let request = instance_request().with_unit_type("Sample.Unit");
    let result = run(&catalog(), &request);
    let text = normalize_whitespace(&result.text);

    assert!(text.contains("int Number1 { get; }"));
    assert!(text.contains("int Number2 { set; }"));
    assert!(text.contains("int Number3 { get; set; }"));
    assert!(text.contains("Unit DoSomething();"));
    assert!(text.contains("int GetSomething(string str);"));
    assert!(text.contains("Task<int> GetNumberAsync();"));
    assert!(text.contains("Task<Unit> DoSomethingAsync();"));
    assert!(!text.contains("Instance."));
    assert!(!text.contains("async"));
}

#[test]
fn test_without_unit_type_keeps_void() {
    let result = run(&catalog(), &instance_request().implemented());
    let text = normalize_whitespace(&result.text);

    assert!(text.contains("void DoSomething() => Instance.DoSomething();"));
    assert!(text.contains("Task DoSomethingAsync() => Instance.DoSomethingAsync();"));
    assert!(!text.contains("Unit"));
}

#[test]
fn test_excluded_members_never_appear() {
    for implement in [false, true] {
        let mut request = instance_request();
        request.implement = implement;
        let result = run(&catalog(), &request);

        assert!(!result.text.contains("ObsTest"));
        assert!(!result.text.contains("Secret"));
        assert!(!result.text.contains("Create"));
    }
}

#[test]
fn test_output_is_deterministic() {
    let request = instance_request().implemented().with_unit_type("Sample.Unit");
    let first = run(&catalog(), &request);
    let second = run(&catalog(), &request);
    assert_eq!(first, second);
}

#[test]
fn test_internal_forwarding_property() {
    let request = instance_request()
        .implemented()
        .with_forwarding_access(ForwardingAccess::Internal);
    let result = run(&catalog(), &request);
    assert!(result
        .text
        .contains("    internal FromInstanceMembersSource Instance { get; }\n"));
}

#[test]
fn test_static_members() {
    let source = ResolvedType {
        namespace: Some("Sample.Io".to_string()),
        name: "FileHelpers".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![],
        members: vec![
            ResolvedMember::Method(
                ResolvedMethod::new("Delete", TypeRef::Void)
                    .with_parameter(Parameter::new("path", string()))
                    .into_static(),
            ),
            ResolvedMember::Method(
                ResolvedMethod::new(
                    "ReadAllTextAsync",
                    TypeRef::generic(Some(TASKS), "Task", vec![string()]),
                )
                .with_parameter(Parameter::new("path", string()))
                .into_static(),
            ),
            ResolvedMember::Method(ResolvedMethod::new("Instance", int())),
        ],
        docs: None,
    };
    let catalog = TypeCatalog::from_types(vec![source, unit_type()]);
    let request = SynthesisRequest::static_members(
        "Sample.Io.FileHelpers",
        TargetSpec::new(Some("Sample.Io"), "IFileSystem"),
    )
    .implemented()
    .with_unit_type("Sample.Unit");

    let result = run(&catalog, &request);
    let text = normalize_whitespace(&result.text);

    assert!(text.contains("Unit Delete(string path) { FileHelpers.Delete(path); return default; }"));
    assert!(text.contains(
        "Task<string> ReadAllTextAsync(string path) => FileHelpers.ReadAllTextAsync(path);"
    ));
    assert!(!text.contains("Instance"));
    assert!(text.contains("namespace Sample.Io;"));
    assert!(text.contains("using Sample;"));
}

#[test]
fn test_value_task_substitution() {
    let source = ResolvedType {
        namespace: Some("Sample".to_string()),
        name: "Worker".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![],
        members: vec![
            ResolvedMember::Method(
                ResolvedMethod::new("RunAsync", TypeRef::named(Some(TASKS), "ValueTask"))
                    .with_parameter(Parameter::new(
                        "token",
                        TypeRef::named(Some("System.Threading"), "CancellationToken"),
                    )),
            ),
            ResolvedMember::Property(ResolvedProperty::new(
                "Completion",
                TypeRef::named(Some(TASKS), "Task"),
            )),
        ],
        docs: None,
    };
    let catalog = TypeCatalog::from_types(vec![source, unit_type()]);
    let request = SynthesisRequest::instance("Sample.Worker", TargetSpec::new(Some("Sample"), "IWorker"))
        .implemented()
        .with_unit_type("Sample.Unit");

    let result = run(&catalog, &request);
    let text = normalize_whitespace(&result.text);

    assert!(text.contains(
        "async ValueTask<Unit> RunAsync(CancellationToken token) { await Instance.RunAsync(token); return default; }"
    ));
    assert!(text.contains(
        "Task<Unit> Completion { get { async Task<Unit> Forward() { await Instance.Completion; return default; } return Forward(); } }"
    ));
    assert!(result.text.contains("using System.Threading;\n"));
}

#[test]
fn test_documentation_is_reproduced() {
    let mut source = source_type();
    source.members = vec![ResolvedMember::Method(
        ResolvedMethod::new("DoSomething", TypeRef::Void)
            .with_docs("<summary>\nDoes something.\n\n</summary>"),
    )];
    let catalog = TypeCatalog::from_types(vec![source]);

    let result = run(&catalog, &instance_request());
    assert!(result.text.contains(
        "    /// <summary>\n    /// Does something.\n    /// </summary>\n    void DoSomething();\n"
    ));
}

#[test]
fn test_generic_members_and_target() {
    let convert = ResolvedMethod::new("Convert", TypeRef::parameter("TOut"))
        .with_type_parameter(
            TypeParameter::new("TOut")
                .with_variance(Variance::Covariant)
                .with_constraint("notnull"),
        )
        .with_parameter(Parameter::new("value", TypeRef::parameter("T")))
        .with_parameter(
            Parameter::new("result", TypeRef::parameter("TOut")).with_ref_kind(RefKind::Out),
        );

    let source = ResolvedType {
        namespace: Some("Sample".to_string()),
        name: "Converter".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![TypeParameter::new("T")],
        members: vec![ResolvedMember::Method(convert)],
        docs: None,
    };
    let catalog = TypeCatalog::from_types(vec![source]);
    let mut target = TargetSpec::new(Some("Sample"), "IConverter");
    target.type_parameters = vec![TypeParameter::new("T").with_variance(Variance::Contravariant)];
    let request = SynthesisRequest::instance("Sample.Converter`1", target).implemented();

    let result = run(&catalog, &request);

    assert_eq!(result.hint_name, "Sample.IConverter_1.AutoInterface.g.cs");
    assert!(result.text.contains("partial interface IConverter<in T>\n"));
    assert!(result.text.contains("protected Converter<T> Instance { get; }"));
    assert!(result.text.contains(
        "TOut Convert<TOut>(T value, out TOut result) where TOut : notnull => Instance.Convert<TOut>(value, out result);"
    ));
}

#[test]
fn test_indexers() {
    let source = ResolvedType {
        namespace: Some("Sample".to_string()),
        name: "Grid".to_string(),
        kind: TypeKind::Class,
        accessibility: Accessibility::Public,
        type_parameters: vec![],
        members: vec![
            ResolvedMember::Property(
                ResolvedProperty::indexer(
                    string(),
                    vec![Parameter::new("row", int()), Parameter::new("column", int())],
                )
                .with_setter(Some(Accessibility::Public)),
            ),
            ResolvedMember::Property(ResolvedProperty::indexer(string(), vec![])),
        ],
        docs: None,
    };
    let catalog = TypeCatalog::from_types(vec![source]);
    let request = SynthesisRequest::instance("Sample.Grid", TargetSpec::new(Some("Sample"), "IGrid"));

    let declared = run(&catalog, &request);
    assert!(declared.text.contains("    string this[int row, int column] { get; set; }\n"));
    assert_eq!(declared.text.matches("this[").count(), 1);

    let forwarded = run(&catalog, &request.clone().implemented());
    assert!(normalize_whitespace(&forwarded.text).contains(
        "string this[int row, int column] { get => Instance[row, column]; set => Instance[row, column] = value; }"
    ));
}

#[test]
fn test_extract_mode() {
    let json = r#"{
        "namespace": "Sample.Data",
        "name": "Repository",
        "kind": "class",
        "accessibility": "internal",
        "typeParameters": [
            { "name": "TKey", "variance": "contravariant" },
            { "name": "TValue", "variance": "covariant", "constraints": ["class"] }
        ],
        "docs": "<summary>\nStores values.\n</summary>",
        "members": [
            {
                "member": "method",
                "name": "Find",
                "returnType": { "kind": "parameter", "name": "TValue", "nullable": true },
                "parameters": [{ "name": "key", "type": { "kind": "parameter", "name": "TKey" } }],
                "accessibility": "public"
            },
            {
                "member": "property",
                "name": "Count",
                "type": { "kind": "named", "namespace": "System", "name": "int" },
                "getter": "public",
                "setter": "public",
                "initOnly": true,
                "accessibility": "public"
            },
            {
                "member": "method",
                "name": "Empty",
                "returnType": { "kind": "void" },
                "accessibility": "public",
                "isStatic": true
            }
        ]
    }"#;
    let source: ResolvedType = serde_json::from_str(json).expect("Failed to parse type");
    let catalog = TypeCatalog::from_types(vec![source]);
    let request = SynthesisRequest::extract("Sample.Data.Repository`2")
        .with_interface_access(InterfaceAccess::Internal);

    let result = run(&catalog, &request);

    let expected = "\
#nullable enable

using Sample.Data;
using System;

namespace Sample.Data;

internal partial class Repository<TKey, TValue> : IRepository<TKey, TValue>;

/// <summary>
/// Stores values.
/// </summary>
internal partial interface IRepository<in TKey, out TValue> where TValue : class
{
    TValue? Find(TKey key);

    int Count { get; init; }
}
";
    assert_eq!(result.text, expected);
    assert_eq!(result.hint_name, "Sample.Data.IRepository_2.AutoInterface.g.cs");
}

#[test]
fn test_configuration_error_produces_no_output() {
    let shapes = WellKnownAwaitables::new();
    let request = instance_request().with_unit_type("Sample.Missing");
    let err = generate(&catalog(), &shapes, &request).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Classify(ClassifyError::UnresolvedUnitType(ref name)) if name == "Sample.Missing"
    ));
    assert_eq!(err.to_string(), "Unit type 'Sample.Missing' could not be resolved");
}

#[test]
fn test_inspect_model_json() {
    let catalog = catalog();
    let shapes = WellKnownAwaitables::new();
    let json = Generator::new(&catalog, &shapes)
        .inspect(&instance_request().with_unit_type("Sample.Unit"))
        .expect("Failed to inspect");

    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert_eq!(value["target"]["name"], "IFromInstanceMembers");
    assert_eq!(value["members"][3]["name"], "DoSomething");
    assert_eq!(value["members"][3]["handling"], "custom");
}

#[test]
fn test_emit_options() {
    let catalog = catalog();
    let shapes = WellKnownAwaitables::new();
    let result = Generator::new(&catalog, &shapes)
        .with_options(EmitOptions {
            indent: "\t".to_string(),
            nullable_directive: false,
        })
        .generate(&instance_request())
        .expect("Failed to generate");

    assert!(result.text.starts_with("using Sample;"));
    assert!(result.text.contains("\n\tint Number1 { get; }\n"));
}

#[test]
fn test_out_parameter_keeps_awaitable_return() {
    let mut source = source_type();
    source.members = vec![ResolvedMember::Method(
        ResolvedMethod::new("StartAsync", TypeRef::named(Some(TASKS), "Task"))
            .with_parameter(Parameter::new("id", int()).with_ref_kind(RefKind::Out)),
    )];
    let catalog = TypeCatalog::from_types(vec![source, unit_type()]);
    let request = instance_request().implemented().with_unit_type("Sample.Unit");

    let result = run(&catalog, &request);

    assert!(result
        .text
        .contains("    Task StartAsync(out int id) => Instance.StartAsync(out id);\n"));
    assert!(!result.text.contains("async"));
}

#[test]
fn test_constraint_types_are_imported() {
    let mut source = source_type();
    source.members = vec![ResolvedMember::Method(
        ResolvedMethod::new("Pick", TypeRef::parameter("T"))
            .with_type_parameter(
                TypeParameter::new("T")
                    .with_constraint("class")
                    .with_constraint(TypeRef::named(Some("Sample.Keys"), "KeyBase")),
            )
            .with_parameter(Parameter::new("value", TypeRef::parameter("T"))),
    )];
    let catalog = TypeCatalog::from_types(vec![source]);

    let result = run(&catalog, &instance_request());

    assert!(result.text.contains("using Sample.Keys;\n"));
    assert!(result.text.contains("T Pick<T>(T value) where T : class, KeyBase;"));
}
