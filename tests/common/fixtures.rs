//! Test fixtures: manifests and template content.

#![allow(dead_code)]

pub const DEFAULT_MANIFEST: &str = "ctob-solution.toml";

/// Attribute file of the `App` project in [`MANIFEST`]
pub const ATTRIBUTE_FILE: &str = "App/App.ctob-attrs.toml";

/// Item path of the template in [`MANIFEST`], relative to the solution root
pub const MODEL_TT: &str = "App/Model.tt";

/// Its generated child
pub const MODEL_CS: &str = "App/Model.cs";

/// One project, one template whose tool copies it to `Model.cs`
pub const MANIFEST: &str = r#"solution = "App.sln"
configuration = "Debug"

[tools.Copy]
command = "cp {input} {output}"

[tools.Broken]
command = "exit 3"

[[projects]]
name = "App"
file = "App/App.csproj"

[[projects.items]]
path = "Model.tt"
custom_tool = "Copy"
children = [{ path = "Model.cs" }]
"#;

/// A template whose generator fails
pub const BROKEN_MANIFEST: &str = r#"solution = "App.sln"

[tools.Broken]
command = "exit 3"

[[projects]]
name = "App"
file = "App/App.csproj"

[[projects.items]]
path = "Model.tt"
custom_tool = "Broken"
children = [{ path = "Model.cs" }]
"#;

/// A template nested below another template
pub const NESTED_MANIFEST: &str = r#"solution = "App.sln"

[tools.Copy]
command = "cp {input} {output}"

[[projects]]
name = "App"
file = "App/App.csproj"

[[projects.items]]
path = "Outer.tt"
custom_tool = "Copy"

[[projects.items.children]]
path = "Outer.cs"

[[projects.items.children]]
path = "Inner.tt"
custom_tool = "Copy"
children = [{ path = "Inner.cs" }]
"#;

pub const TEMPLATE: &str = r#"<#@ template language="C#" #>
<#@ output extension=".cs" #>
public partial class Model { }
"#;

/// Template declaring a reference below the solution directory
pub const TEMPLATE_WITH_REFERENCE: &str = r#"<#@ template language="C#" #>
<#@ assembly name="System.Core" #>
<#@ assembly name="$(SolutionDir)lib/$(Configuration)/Shared.dll" #>
public partial class Model { }
"#;
