//! Lowering tests: whole programs in, rendered IR text out

use crate::ir::Instruction;
use crate::Frontend;
use pretty_assertions::assert_eq;

fn compile(source: &str) -> (crate::ir::Module, syc_common::ErrorReporter) {
    Frontend::compile_to_ir(source).unwrap()
}

fn compile_clean(source: &str) -> crate::ir::Module {
    let (module, reporter) = compile(source);
    assert!(
        !reporter.has_errors(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    module
}

fn count_instructions<F: Fn(&Instruction) -> bool>(module: &crate::ir::Module, name: &str, pred: F) -> usize {
    module
        .get_function(name)
        .unwrap()
        .entry_block()
        .instructions
        .iter()
        .filter(|i| pred(i))
        .count()
}

#[test]
fn test_two_locals_add_and_return() {
    let module = compile_clean("int main() { int a = 1; int b = 2; return a + b; }");

    let expected = "\
declare i32 @getint()
declare void @putint(i32)

define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 1, i32* %0, align 4
  %1 = alloca i32, align 4
  store i32 2, i32* %1, align 4
  %2 = load i32, i32* %0, align 4
  %3 = load i32, i32* %1, align 4
  %4 = add i32 %2, %3
  ret i32 %4
}
";
    assert_eq!(format!("{}", module), expected);
}

#[test]
fn test_alloca_count_matches_local_count() {
    let module = compile_clean("int main() { int a; int b; int c; return 0; }");
    let allocas = count_instructions(&module, "main", |i| matches!(i, Instruction::Alloca { .. }));
    assert_eq!(allocas, 3);
}

#[test]
fn test_file_scope_const_folding() {
    let module = compile_clean(
        "const int a = 2;\n\
         const int b = 3;\n\
         int c = a * b;\n\
         int main() { return c; }",
    );

    // The product folds at compile time; no instruction computes it
    assert_eq!(
        format!("{}", module.get_global("c").unwrap()),
        "@c = dso_local global i32 6, align 4"
    );
    assert_eq!(
        format!("{}", module.get_global("a").unwrap()),
        "@a = dso_local constant i32 2, align 4"
    );

    // main just loads the global
    let expected_main = "\
define i32 @main() {
mainEntry:
  %0 = load i32, i32* @c, align 4
  ret i32 %0
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected_main);
}

#[test]
fn test_const_scalar_reads_never_load() {
    let module = compile_clean("int main() { const int k = 7; return k + 1; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 7, i32* %0, align 4
  ret i32 8
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_const_2d_array_flattening_with_padding() {
    let module = compile_clean(
        "int main() { const int m[2][2] = {{1, 2}, {3}}; return m[1][0]; }",
    );

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca [4 x i32], align 16
  %1 = getelementptr [4 x i32], [4 x i32]* %0, i32 0, i32 0
  store i32 1, i32* %1, align 4
  %2 = getelementptr [4 x i32], [4 x i32]* %0, i32 0, i32 1
  store i32 2, i32* %2, align 4
  %3 = getelementptr [4 x i32], [4 x i32]* %0, i32 0, i32 2
  store i32 3, i32* %3, align 4
  %4 = getelementptr [4 x i32], [4 x i32]* %0, i32 0, i32 3
  store i32 0, i32* %4, align 4
  %5 = getelementptr [4 x i32], [4 x i32]* %0, i32 0, i32 2
  %6 = load i32, i32* %5, align 4
  ret i32 %6
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_global_array_padding_to_block_boundaries() {
    let module = compile_clean("const int g[2][3] = {{1, 2}, {}};");
    assert_eq!(
        format!("{}", module.get_global("g").unwrap()),
        "@g = dso_local constant [6 x i32] [i32 1, i32 2, i32 0, i32 0, i32 0, i32 0], align 16"
    );
}

#[test]
fn test_global_arrays_without_initializer_zero_fill() {
    let module = compile_clean("int g[4][2];");
    assert_eq!(
        format!("{}", module.get_global("g").unwrap()),
        "@g = dso_local global [8 x i32] zeroinitializer, align 16"
    );
}

#[test]
fn test_runtime_array_indexing() {
    let module = compile_clean(
        "int main() { int a[3] = {1, 2, 3}; int i = 1; return a[i]; }",
    );

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca [3 x i32], align 16
  %1 = getelementptr [3 x i32], [3 x i32]* %0, i32 0, i32 0
  store i32 1, i32* %1, align 4
  %2 = getelementptr [3 x i32], [3 x i32]* %0, i32 0, i32 1
  store i32 2, i32* %2, align 4
  %3 = getelementptr [3 x i32], [3 x i32]* %0, i32 0, i32 2
  store i32 3, i32* %3, align 4
  %4 = alloca i32, align 4
  store i32 1, i32* %4, align 4
  %5 = load i32, i32* %4, align 4
  %6 = mul i32 %5, 1
  %7 = getelementptr [3 x i32], [3 x i32]* %0, i32 0, i32 %6
  %8 = load i32, i32* %7, align 4
  ret i32 %8
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_two_dimensional_runtime_offset_arithmetic() {
    let module = compile_clean(
        "int g[4][3];\n\
         int main() { int i = 1; int j = 2; return g[i][j]; }",
    );

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 1, i32* %0, align 4
  %1 = alloca i32, align 4
  store i32 2, i32* %1, align 4
  %2 = load i32, i32* %0, align 4
  %3 = mul i32 %2, 3
  %4 = load i32, i32* %1, align 4
  %5 = mul i32 %4, 1
  %6 = add i32 %3, %5
  %7 = getelementptr [12 x i32], [12 x i32]* @g, i32 0, i32 %6
  %8 = load i32, i32* %7, align 4
  ret i32 %8
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_register_numbering_restarts_per_function() {
    let module = compile_clean(
        "int first() { int a = 1; return a; }\n\
         int second() { int b = 2; return b; }",
    );

    for name in ["first", "second"] {
        let function = module.get_function(name).unwrap();
        let results: Vec<_> = function
            .entry_block()
            .instructions
            .iter()
            .filter_map(|i| i.result())
            .collect();
        // Strictly increasing from 0 with no repeats
        let expected: Vec<_> = (0..results.len() as u32).collect();
        assert_eq!(results, expected);
    }
}

#[test]
fn test_parameters_spill_to_slots() {
    let module = compile_clean("int add(int a, int b) { return a + b; }");

    let expected = "\
define i32 @add(i32 %0, i32 %1) {
mainEntry:
  %2 = alloca i32, align 4
  store i32 %0, i32* %2, align 4
  %3 = alloca i32, align 4
  store i32 %1, i32* %3, align 4
  %4 = load i32, i32* %2, align 4
  %5 = load i32, i32* %3, align 4
  %6 = add i32 %4, %5
  ret i32 %6
}
";
    assert_eq!(format!("{}", module.get_function("add").unwrap()), expected);
}

#[test]
fn test_shadowing_rebinds_inner_scope_only() {
    let module = compile_clean(
        "int main() { int x = 1; { int x = 2; x = 3; } return x; }",
    );

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 1, i32* %0, align 4
  %1 = alloca i32, align 4
  store i32 2, i32* %1, align 4
  store i32 3, i32* %1, align 4
  %2 = load i32, i32* %0, align 4
  ret i32 %2
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_comparisons_widen_through_zext() {
    let module = compile_clean("int main() { int a = 5; return a < 10; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 5, i32* %0, align 4
  %1 = load i32, i32* %0, align 4
  %2 = icmp slt i32 %1, 10
  %3 = zext i1 %2 to i32
  ret i32 %3
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_logical_not_lowers_to_icmp_eq_zero() {
    let module = compile_clean("int main() { int a = 5; return !a; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 5, i32* %0, align 4
  %1 = load i32, i32* %0, align 4
  %2 = icmp eq i32 %1, 0
  %3 = zext i1 %2 to i32
  ret i32 %3
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_external_primitive_calls() {
    let module = compile_clean("int main() { int x = getint(); putint(x); return 0; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  %1 = call i32 @getint()
  store i32 %1, i32* %0, align 4
  %2 = load i32, i32* %0, align 4
  call void @putint(i32 %2)
  ret i32 0
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_call_to_defined_function() {
    let module = compile_clean(
        "int double(int x) { return x + x; }\n\
         int main() { return double(21); }",
    );

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = call i32 @double(i32 21)
  ret i32 %0
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_void_function_gets_implicit_return() {
    let module = compile_clean("void nop() { }");
    assert_eq!(
        format!("{}", module.get_function("nop").unwrap()),
        "define void @nop() {\nmainEntry:\n  ret void\n}\n"
    );
}

#[test]
fn test_int_function_gets_implicit_return_zero() {
    let module = compile_clean("int main() { int a = 1; }");
    let function = module.get_function("main").unwrap();
    assert_eq!(
        format!("{}", function.entry_block().instructions.last().unwrap()),
        "ret i32 0"
    );
}

#[test]
fn test_undefined_reference_substitutes_placeholder() {
    let (module, reporter) = compile("int main() { return y; }");

    assert!(reporter.has_errors());
    assert_eq!(
        format!("{}", module.get_function("main").unwrap()),
        "define i32 @main() {\nmainEntry:\n  ret i32 undef\n}\n"
    );
}

#[test]
fn test_redefinition_keeps_prior_binding() {
    let (module, reporter) = compile("int main() { int a = 1; int a = 2; return a; }");

    assert_eq!(reporter.error_count(), 1);
    // The rejected redefinition emits nothing; reads resolve to the first slot
    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 1, i32* %0, align 4
  %1 = load i32, i32* %0, align 4
  ret i32 %1
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_assignment_to_constant_reports() {
    let (module, reporter) = compile("int main() { const int k = 1; k = 2; return k; }");

    assert!(reporter.has_errors());
    // The store for the assignment is absent; the const read stays folded
    assert_eq!(
        format!("{}", module.get_function("main").unwrap()),
        "define i32 @main() {\n\
         mainEntry:\n\
         \x20 %0 = alloca i32, align 4\n\
         \x20 store i32 1, i32* %0, align 4\n\
         \x20 ret i32 1\n\
         }\n"
    );
}

#[test]
fn test_control_flow_statements_skip_with_warning() {
    let (module, reporter) = compile(
        "int main() { int a = 1; while (a < 10) a = a + 1; if (a) return 1; return a; }",
    );

    assert_eq!(reporter.warning_count(), 2);
    // Still a single straight-line block
    let function = module.get_function("main").unwrap();
    assert_eq!(function.blocks.len(), 1);

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca i32, align 4
  store i32 1, i32* %0, align 4
  %1 = load i32, i32* %0, align 4
  ret i32 %1
}
";
    assert_eq!(format!("{}", function), expected);
}

#[test]
fn test_logical_operators_not_lowered() {
    let (module, reporter) = compile("int main() { int a = 1; return a && 1; }");

    assert_eq!(reporter.warning_count(), 1);
    assert_eq!(
        format!(
            "{}",
            module
                .get_function("main")
                .unwrap()
                .entry_block()
                .instructions
                .last()
                .unwrap()
        ),
        "ret i32 undef"
    );
}

#[test]
fn test_excess_initializer_values_report_and_clamp() {
    let (module, reporter) = compile("const int a[2] = {1, 2, 3};");

    assert!(reporter.has_errors());
    assert_eq!(
        format!("{}", module.get_global("a").unwrap()),
        "@a = dso_local constant [2 x i32] [i32 1, i32 2], align 16"
    );
}

#[test]
fn test_local_array_without_initializer_stays_unstored() {
    let module = compile_clean("int main() { int a[8]; return 0; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca [8 x i32], align 16
  ret i32 0
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_local_mutable_array_stores_every_element() {
    let module = compile_clean("int main() { int a[2][2] = {{1}, {2}}; return 0; }");

    let stores = count_instructions(&module, "main", |i| matches!(i, Instruction::Store { .. }));
    // All four slots are written, padding zeros included
    assert_eq!(stores, 4);
}

#[test]
fn test_runtime_initializer_leaves_emit_code() {
    let module = compile_clean("int main() { int a[2] = {getint(), 5}; return a[0]; }");

    let expected = "\
define i32 @main() {
mainEntry:
  %0 = alloca [2 x i32], align 16
  %1 = call i32 @getint()
  %2 = getelementptr [2 x i32], [2 x i32]* %0, i32 0, i32 0
  store i32 %1, i32* %2, align 4
  %3 = getelementptr [2 x i32], [2 x i32]* %0, i32 0, i32 1
  store i32 5, i32* %3, align 4
  %4 = getelementptr [2 x i32], [2 x i32]* %0, i32 0, i32 0
  %5 = load i32, i32* %4, align 4
  ret i32 %5
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_global_scalar_assignment_in_function() {
    let module = compile_clean("int g;\nint main() { g = 42; return g; }");

    let expected = "\
define i32 @main() {
mainEntry:
  store i32 42, i32* @g, align 4
  %0 = load i32, i32* @g, align 4
  ret i32 %0
}
";
    assert_eq!(format!("{}", module.get_function("main").unwrap()), expected);
}

#[test]
fn test_octal_and_hex_literals_lower_as_decimal_text() {
    let module = compile_clean("int main() { return 0x10 + 010; }");
    assert_eq!(
        format!(
            "{}",
            module
                .get_function("main")
                .unwrap()
                .entry_block()
                .instructions
                .last()
                .unwrap()
        ),
        "ret i32 24"
    );
}
