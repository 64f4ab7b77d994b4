mod common;

use matwrap_backend_core::DiagnosticLevel;

const CUTOUT: &str = r#"
Shader "Custom/Cutout" {
    Properties {
        _MainTex ("Main Texture", 2D) = "white" {}
        _Cutoff ("Alpha cutoff", Range(0,1)) = 0.5
    }
    SubShader {
        Tags { "Queue"="AlphaTest" }
    }
}
"#;

#[test]
fn cutout_matches_golden_files() {
    let output = common::generate(CUTOUT, "Demo", "Cutout");
    assert_eq!(output.files.len(), 2);

    assert_eq!(output.files[0].name, "Cutout.cs");
    assert_eq!(output.files[0].content, include_str!("golden/Cutout.cs"));

    assert_eq!(output.files[1].name, "CutoutLoader.cs");
    assert_eq!(output.files[1].content, include_str!("golden/CutoutLoader.cs"));
}

#[test]
fn texture2d_yields_three_accessors_and_three_setters() {
    let source = "Shader \"T\" {\n    _MainTex (\"Main Texture\", 2D) = \"white\" {}\n}\n";
    let output = common::generate(source, "Demo", "T");
    let wrapper = &output.files[0].content;
    let loader = &output.files[1].content;

    assert!(wrapper.contains("public Texture2D mainTex\n"));
    assert!(wrapper.contains("public Vector2 mainTexScale\n"));
    assert!(wrapper.contains("public Vector2 mainTexOffset\n"));
    assert_eq!(wrapper.matches("            public Texture2D ").count(), 1);
    assert_eq!(wrapper.matches("            public Vector2 ").count(), 2);

    assert_eq!(loader.matches("[ParserTarget(").count(), 3);
}

#[test]
fn range_clamps_only_on_write() {
    let output = common::generate(CUTOUT, "Demo", "Cutout");
    let wrapper = &output.files[0].content;

    assert_eq!(wrapper.matches("Mathf.Clamp").count(), 1);
    let set_line = wrapper
        .lines()
        .find(|l| l.contains("Mathf.Clamp"))
        .unwrap();
    assert!(set_line.trim_start().starts_with("set { SetFloat"));
    assert!(set_line.contains("Mathf.Clamp(value, 0f, 1f)"));
    assert!(wrapper.contains("get { return GetFloat (Properties.Instance.cutoffID); }"));
}

#[test]
fn ocean_surface_every_type() {
    let output = common::generate(&common::load_demo("ocean-surface"), "Kopernicus", "Ocean");
    let wrapper = &output.files[0].content;
    let loader = &output.files[1].content;

    for decl in [
        "public Color color\n",
        "public Color specColor\n",
        "public float shininess\n",
        "public float waveSpeed\n",
        "public Vector4 fogParams\n",
        "public Texture2D mainTex\n",
        "public Texture3D noiseVolume\n",
        "public Cubemap reflectionCube\n",
    ] {
        assert!(wrapper.contains(decl), "missing `{}`", decl.trim_end());
    }
    assert!(wrapper.contains("GetTexture (Properties.Instance.noiseVolumeID) as Texture3D"));
    assert!(wrapper.contains("GetTexture (Properties.Instance.reflectionCubeID) as Cubemap"));
    assert!(wrapper.contains("Mathf.Clamp(value, 0.03f, 1f)"));

    for setter in [
        "public ColorParser colorSetter",
        "public NumericParser<float> shininessSetter",
        "public NumericParser<float> waveSpeedSetter",
        "public Vector4Parser fogParamsSetter",
        "public Texture2DParser mainTexSetter",
        "public Texture3DParser noiseVolumeSetter",
        "public TextureCubeParser reflectionCubeSetter",
    ] {
        assert!(loader.contains(setter), "missing `{setter}`");
    }
    // 8 properties + scale/offset for the one 2D texture.
    assert_eq!(loader.matches("[ParserTarget(").count(), 10);
    assert_eq!(wrapper.matches("= Shader.PropertyToID(").count(), 8);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].level, DiagnosticLevel::Info);
    assert_eq!(output.diagnostics[0].message, "8 properties, 10 loader setters");
}

#[test]
fn unnamed_shader_has_empty_name_constant() {
    let output = common::generate(&common::load_demo("unnamed"), "Kopernicus", "Unnamed");
    assert_eq!(output.files.len(), 2);
    assert!(
        output.files[0]
            .content
            .contains("public const string shaderName = \"\";")
    );
    assert!(!output.diagnostics.is_empty());
}

#[test]
fn property_order_is_preserved() {
    let output = common::generate(&common::load_demo("ocean-surface"), "Kopernicus", "Ocean");
    let wrapper = &output.files[0].content;
    let positions: Vec<usize> = ["colorID =", "specColorID =", "shininessID =", "reflectionCubeID ="]
        .iter()
        .map(|needle| wrapper.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn generation_is_deterministic() {
    let source = common::load_demo("ocean-surface");
    let a = common::generate(&source, "Kopernicus", "Ocean");
    let b = common::generate(&source, "Kopernicus", "Ocean");
    for (fa, fb) in a.files.iter().zip(&b.files) {
        assert_eq!(fa.name, fb.name);
        assert_eq!(fa.content, fb.content);
    }
}

#[test]
fn shader_name_is_escaped() {
    let source = "Shader \"Odd\\\"Name\" {\n}\n";
    let output = common::generate(source, "Demo", "Odd");
    assert!(
        output.files[0]
            .content
            .contains(r#"public const string shaderName = "Odd\\\"Name";"#)
    );
}
