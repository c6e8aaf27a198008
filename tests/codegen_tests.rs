// Integration tests for the C code generator

use anyhow::Result;

use lanc::ast::nodes::{AstNode, BinOp, DataType, Shape};
use lanc::ast::printer::format_ast;
use lanc::codegen::emit::{emit_program, program_to_string};
use lanc::codegen::generator::CodeGenerator;

/// Generate a single node (not a whole program) into a string.
fn gen(node: &AstNode) -> String {
    let mut buf = Vec::new();
    let mut generator = CodeGenerator::new(&mut buf);
    generator.emit(node).expect("generation failed");
    String::from_utf8(buf).expect("generated C is UTF-8")
}

#[test]
fn test_array_declaration_and_indexed_assignment() {
    let decl = AstNode::decl("v", DataType::Int, Shape::Array, 5, 0);
    assert_eq!(gen(&decl), "int v[5];\n");

    let assign = AstNode::assign_indexed("v", AstNode::int_lit(2), None, AstNode::int_lit(10));
    assert_eq!(gen(&assign), "v[2] = 10;\n");
}

#[test]
fn test_matrix_declaration_and_assignment() {
    let decl = AstNode::decl("m", DataType::Float, Shape::Matrix, 3, 4);
    assert_eq!(gen(&decl), "float m[3][4];\n");

    let assign = AstNode::assign_indexed(
        "m",
        AstNode::int_lit(0),
        Some(AstNode::int_lit(1)),
        AstNode::float_lit(2.5),
    );
    assert_eq!(gen(&assign), "m[0][1] = 2.5;\n");
}

#[test]
fn test_power_operator_becomes_pow_call() {
    let expr = AstNode::bin_op(BinOp::Pow, AstNode::int_lit(2), AstNode::int_lit(8));
    assert_eq!(gen(&expr), "pow(2, 8)");
}

#[test]
fn test_other_operators_stay_infix_and_parenthesized() {
    // (a + b) * 2 keeps the source grouping through explicit parens.
    let expr = AstNode::bin_op(
        BinOp::Mul,
        AstNode::bin_op(
            BinOp::Add,
            AstNode::var("a", DataType::Int),
            AstNode::var("b", DataType::Int),
        ),
        AstNode::int_lit(2),
    );
    assert_eq!(gen(&expr), "((a + b) * 2)");
}

#[test]
fn test_print_literal_directly_and_variable_by_type() {
    let stmts = AstNode::seq(
        AstNode::print_stmt(AstNode::str_lit("\"Hello\"")),
        Some(AstNode::print_stmt(AstNode::var("x", DataType::Float))),
    );
    assert_eq!(
        gen(&stmts),
        "printf(\"%s\\n\", \"Hello\");\nprintf(\"%f\\n\", x);\n"
    );
}

#[test]
fn test_print_argument_chain_emits_one_statement_per_value() {
    // Chain built by prepending: head n, rest holds "Hello". The walk
    // prints head first.
    let args = AstNode::arg_list(
        AstNode::var("n", DataType::Int),
        Some(AstNode::arg_list(AstNode::str_lit("\"Hello\""), None)),
    );
    let out = gen(&AstNode::print_stmt(args));
    assert_eq!(
        out,
        "printf(\"%d\\n\", n);\nprintf(\"%s\\n\", \"Hello\");\n"
    );
}

#[test]
fn test_inclusive_for_loop() {
    let body = AstNode::assign(
        AstNode::var("x", DataType::Int),
        AstNode::var("i", DataType::Int),
    );
    let node = AstNode::for_stmt("i", AstNode::int_lit(1), AstNode::int_lit(5), body);
    assert_eq!(gen(&node), "for (i = 1; i <= 5; i++) {\nx = i;\n}\n");
}

#[test]
fn test_parameter_order_is_preserved() {
    // The parser prepends each parameter as it reduces, so after a, b, c
    // the head of the list is c. Emission must restore a, b, c.
    let mut params = AstNode::param_list(AstNode::decl("a", DataType::Int, Shape::Scalar, 0, 0), None);
    params = AstNode::param_list(
        AstNode::decl("b", DataType::Int, Shape::Scalar, 0, 0),
        Some(params),
    );
    params = AstNode::param_list(
        AstNode::decl("c", DataType::Float, Shape::Scalar, 0, 0),
        Some(params),
    );

    let func = AstNode::func_def(
        "f",
        DataType::Int,
        Some(params),
        AstNode::return_stmt(AstNode::int_lit(0)),
    );
    let out = gen(&func);
    assert!(
        out.contains("int f(int a, int b, float c) {"),
        "parameters out of order:\n{}",
        out
    );
}

#[test]
fn test_argument_order_is_preserved() {
    let mut args = AstNode::arg_list(AstNode::var("x", DataType::Int), None);
    args = AstNode::arg_list(AstNode::var("y", DataType::Int), Some(args));

    let call = AstNode::func_call("f", Some(args));
    assert_eq!(gen(&call), "f(x, y)");
}

#[test]
fn test_array_and_matrix_access_in_expressions() {
    let assign = AstNode::assign(
        AstNode::var("x", DataType::Int),
        AstNode::array_access("v", AstNode::int_lit(2), None),
    );
    assert_eq!(gen(&assign), "x = v[2];\n");

    let access = AstNode::array_access(
        "m",
        AstNode::var("i", DataType::Int),
        Some(AstNode::var("j", DataType::Int)),
    );
    assert_eq!(gen(&access), "m[i][j]");
}

#[test]
fn test_call_for_value_vs_call_for_effect() {
    let args = AstNode::arg_list(AstNode::int_lit(1), None);
    assert_eq!(gen(&AstNode::func_call("f", Some(args.clone()))), "f(1)");
    assert_eq!(gen(&AstNode::proc_call("f", Some(args))), "f(1);\n");
}

#[test]
fn test_unit_definition_instance_and_field_assignment() {
    let fields = AstNode::seq(
        AstNode::decl("x", DataType::Int, Shape::Scalar, 0, 0),
        Some(AstNode::seq(
            AstNode::decl("y", DataType::Int, Shape::Scalar, 0, 0),
            None,
        )),
    );
    let def = AstNode::unit_def("Point", fields);
    assert_eq!(gen(&def), "struct Point {\nint x;\nint y;\n};\n");

    let instance = AstNode::unit_instance_decl("p", "Point");
    assert_eq!(gen(&instance), "struct Point p;\n");

    let assign = AstNode::assign(AstNode::field_access("p", "x"), AstNode::int_lit(10));
    assert_eq!(gen(&assign), "p.x = 10;\n");
}

#[test]
fn test_unit_parameter_and_unit_return() {
    let params = AstNode::param_list(AstNode::unit_instance_decl("p", "Point"), None);
    let func = AstNode::func_def(
        "norm",
        DataType::Float,
        Some(params),
        AstNode::return_stmt(AstNode::field_access("p", "x")),
    );
    let out = gen(&func);
    assert!(
        out.contains("float norm(struct Point p) {"),
        "unit parameter misspelled:\n{}",
        out
    );

    let ctor = AstNode::unit_func_def(
        "origin",
        "Point",
        None,
        AstNode::return_stmt(AstNode::var("p", DataType::Unit)),
    );
    let out = gen(&ctor);
    assert!(
        out.contains("struct Point origin() {"),
        "unit return misspelled:\n{}",
        out
    );
}

#[test]
fn test_string_declaration_reserves_a_buffer() {
    let decl = AstNode::decl("s", DataType::Str, Shape::Scalar, 0, 0);
    assert_eq!(gen(&decl), "char s[256];\n");
}

#[test]
fn test_read_address_of_policy() {
    assert_eq!(gen(&AstNode::read("n", DataType::Int)), "scanf(\"%d\", &n);\n");
    assert_eq!(gen(&AstNode::read("t", DataType::Float)), "scanf(\"%f\", &t);\n");
    // A string buffer decays to a pointer; no address-of.
    assert_eq!(gen(&AstNode::read("s", DataType::Str)), "scanf(\"%255s\", s);\n");
}

#[test]
fn test_read_into_array_and_matrix_elements() {
    let array = AstNode::read_array("v", AstNode::var("i", DataType::Int), DataType::Float);
    assert_eq!(gen(&array), "scanf(\"%f\", &v[i]);\n");

    let matrix = AstNode::read_matrix(
        "m",
        AstNode::var("i", DataType::Int),
        AstNode::var("j", DataType::Int),
        DataType::Int,
    );
    assert_eq!(gen(&matrix), "scanf(\"%d\", &m[i][j]);\n");
}

#[test]
fn test_label_is_always_followed_by_a_statement() {
    assert_eq!(gen(&AstNode::label_stmt("done")), "done:\n;\n");
    assert_eq!(gen(&AstNode::goto_stmt("done")), "goto done;\n");

    // Even when the label is the last thing in a block, the emitted C
    // stays valid because of the null statement.
    let block = AstNode::block(AstNode::seq(
        AstNode::goto_stmt("done"),
        Some(AstNode::label_stmt("done")),
    ));
    assert_eq!(gen(&block), "{\ngoto done;\ndone:\n;\n}\n");
}

#[test]
fn test_if_else_and_while_translation() {
    let cond = AstNode::bin_op(
        BinOp::Lt,
        AstNode::var("i", DataType::Int),
        AstNode::int_lit(10),
    );
    let node = AstNode::if_stmt(
        cond.clone(),
        AstNode::assign(AstNode::var("x", DataType::Int), AstNode::int_lit(1)),
        Some(AstNode::assign(
            AstNode::var("x", DataType::Int),
            AstNode::int_lit(2),
        )),
    );
    assert_eq!(gen(&node), "if ((i < 10)) {\nx = 1;\n}\nelse {\nx = 2;\n}\n");

    let node = AstNode::while_stmt(
        cond,
        AstNode::assign(
            AstNode::var("i", DataType::Int),
            AstNode::bin_op(
                BinOp::Add,
                AstNode::var("i", DataType::Int),
                AstNode::int_lit(1),
            ),
        ),
    );
    assert_eq!(gen(&node), "while ((i < 10)) {\ni = (i + 1);\n}\n");
}

#[test]
fn test_cast_emission() {
    let node = AstNode::cast(DataType::Float, AstNode::int_lit(3));
    assert_eq!(gen(&node), "(float)(3)");
}

#[test]
fn test_float_literal_keeps_a_decimal_point() {
    assert_eq!(gen(&AstNode::float_lit(3.14)), "3.14");
    assert_eq!(gen(&AstNode::float_lit(5.0)), "5.0");
}

fn sample_program() -> AstNode {
    // float area(float r) { return (r * r); }
    // unit Point { int x; int y; }
    // main block: int v[5]; v[2] = 10; print "Hello";
    let func = AstNode::func_def(
        "area",
        DataType::Float,
        Some(AstNode::param_list(
            AstNode::decl("r", DataType::Float, Shape::Scalar, 0, 0),
            None,
        )),
        AstNode::return_stmt(AstNode::bin_op(
            BinOp::Mul,
            AstNode::var("r", DataType::Float),
            AstNode::var("r", DataType::Float),
        )),
    );
    let unit = AstNode::unit_def(
        "Point",
        AstNode::seq(AstNode::decl("x", DataType::Int, Shape::Scalar, 0, 0), None),
    );
    let globals = AstNode::seq(unit, Some(AstNode::seq(func, None)));

    let main_stmts = AstNode::seq(
        AstNode::decl("v", DataType::Int, Shape::Array, 5, 0),
        Some(AstNode::seq(
            AstNode::assign_indexed("v", AstNode::int_lit(2), None, AstNode::int_lit(10)),
            Some(AstNode::seq(
                AstNode::print_stmt(AstNode::str_lit("\"Hello\"")),
                None,
            )),
        )),
    );

    AstNode::seq(globals, Some(AstNode::block(main_stmts)))
}

#[test]
fn test_emit_program_prologue_and_main_synthesis() -> Result<()> {
    let out = program_to_string(&sample_program())?;

    assert!(
        out.starts_with(
            "#include <stdio.h>\n#include <stdlib.h>\n#include <math.h>\n#include <string.h>\n"
        ),
        "prologue missing:\n{}",
        out
    );
    assert!(out.contains("struct Point {"));
    assert!(out.contains("\nfloat area(float r) {"));
    assert!(out.contains("\nint main() {\nint v[5];\n"), "main block misplaced:\n{}", out);
    assert!(out.contains("v[2] = 10;"));
    assert!(out.ends_with("return 0;\n}\n"), "trailer missing:\n{}", out);
    // The main block's own braces are dropped; main supplies the pair.
    assert!(!out.contains("{\n{"), "doubled braces:\n{}", out);
    Ok(())
}

#[test]
fn test_bare_root_is_wrapped_whole() -> Result<()> {
    let root = AstNode::print_stmt(AstNode::str_lit("\"hi\""));
    let out = program_to_string(&root)?;
    assert!(out.contains("int main() {\nprintf(\"%s\\n\", \"hi\");\nreturn 0;\n}\n"));
    Ok(())
}

#[test]
fn test_generation_is_deterministic() -> Result<()> {
    let root = sample_program();
    let first = program_to_string(&root)?;
    let second = program_to_string(&root)?;
    assert_eq!(first, second, "same tree must generate byte-identical output");
    Ok(())
}

#[test]
fn test_emit_program_into_io_sink() -> Result<()> {
    let mut buf: Vec<u8> = Vec::new();
    emit_program(&sample_program(), &mut buf)?;
    assert!(!buf.is_empty());
    Ok(())
}

#[test]
fn test_printer_covers_the_sample_tree() {
    let listing = format_ast(&sample_program());
    assert!(listing.contains("UNIT: Point"));
    assert!(listing.contains("FUNCTION: area (Float)"));
    assert!(listing.contains("Assign Array: v [...] :="));
    assert!(listing.contains("PRINT:"));
}
