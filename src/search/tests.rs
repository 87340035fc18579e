use super::literal_search::*;
use super::*;

const SAMPLE: &str = "#include <benchmark/benchmark.h>

static void StringCreation(benchmark::State& state) {
  for (auto _ : state) {
    std::string created_string(\"hello\");
  }
}
BENCHMARK(StringCreation);
";

#[test]
fn test_find_literal() {
    assert_eq!(find_literal("abcabc", "bc", 0).unwrap().range, 1..3);
    assert_eq!(find_literal("abcabc", "bc", 2).unwrap().range, 4..6);
    assert!(find_literal("abc", "", 0).is_none());
    assert!(find_literal("abc", "a", 10).is_none());
}

#[test]
fn test_cursor_steps() {
    assert_eq!(skip_whitespace("  \t\nx", 0), 4);
    assert_eq!(skip_whitespace("x", 0), 0);
    assert_eq!(skip_whitespace("x", 5), 5);
    assert_eq!(expect_literal("a::b", 1, "::"), Some(3));
    assert_eq!(expect_literal("a::b", 0, "::"), None);
    assert_eq!(next_char_boundary("éa", 0), 2);
    assert_eq!(next_char_boundary("a", 1), 1);
}

#[test]
fn test_locate_sample() {
    let m = locate(SAMPLE, "StringCreation").unwrap();
    assert_eq!(m.name, "StringCreation");

    let name_at = SAMPLE.find("StringCreation").unwrap();
    assert_eq!(m.definition_offset, name_at - 1);
    assert_eq!(m.definition_name, name_at..name_at + "StringCreation".len());

    let reg_at = SAMPLE.find("BENCHMARK(").unwrap();
    assert_eq!(m.registration_offset, reg_at);
    assert_eq!(
        &SAMPLE[m.registration_name.clone()],
        "StringCreation"
    );
}

#[test]
fn test_definition_allows_spacing() {
    let text = "void  foo ( benchmark :: State & s) {}";
    let (start, span) = find_definition(text, "foo").unwrap();
    assert_eq!(start, 5);
    assert_eq!(span, 6..9);

    let packed = "void foo(benchmark::State&s){}";
    assert!(find_definition(packed, "foo").is_some());
}

#[test]
fn test_definition_requires_leading_whitespace() {
    assert!(find_definition("void*foo(benchmark::State& s)", "foo").is_none());
    assert!(find_definition("foo(benchmark::State& s)", "foo").is_none());
    assert!(find_definition("\nfoo(benchmark::State& s)", "foo").is_some());
}

#[test]
fn test_definition_requires_state_reference() {
    assert!(find_definition("void foo(int& s)", "foo").is_none());
    assert!(find_definition("void foo(benchmark::State s)", "foo").is_none());
    assert!(find_definition("void foo(benchmark::State* s)", "foo").is_none());
    // The name must be followed by the parameter list, not a longer word
    assert!(find_definition("void foobar(benchmark::State& s)", "foo").is_none());
}

#[test]
fn test_definition_skips_non_matching_occurrences() {
    let text = "// foo is measured\nstatic void foo(benchmark::State& s) {}";
    let (start, span) = find_definition(text, "foo").unwrap();
    assert_eq!(&text[span.clone()], "foo");
    assert_eq!(start, span.start - 1);
    assert!(span.start > text.find('\n').unwrap());
}

#[test]
fn test_registration_patterns() {
    let (start, span) = find_registration("BENCHMARK( foo );", "foo").unwrap();
    assert_eq!(start, 0);
    assert_eq!(span, 11..14);

    assert!(find_registration("BENCHMARK(foo)->Arg(8);", "foo").is_some());
    assert!(find_registration("BENCHMARK(foobar);", "foo").is_none());
    assert!(find_registration("BENCHMARK(foo, 1);", "foo").is_none());
    assert!(find_registration("benchmark(foo);", "foo").is_none());
    assert!(find_registration("BENCHMARK(foo);", "").is_none());
}

#[test]
fn test_registration_takes_first_matching_call() {
    let text = "BENCHMARK(a);\nBENCHMARK(b);\nBENCHMARK(b);";
    let (start, _) = find_registration(text, "b").unwrap();
    assert_eq!(start, 14);
}

#[test]
fn test_registration_name_is_not_searched_inside_macro() {
    // The name span must be the argument, not the prefix of BENCHMARK
    let text = "void BENCH(benchmark::State& s) {}\nBENCHMARK(BENCH);";
    let m = locate(text, "BENCH").unwrap();
    assert_eq!(&text[m.registration_name.clone()], "BENCH");
    assert_eq!(m.registration_name.start, m.registration_offset + "BENCHMARK(".len());
}

#[test]
fn test_locate_requires_both_halves() {
    assert!(locate("void foo(benchmark::State& s) {}", "foo").is_none());
    assert!(locate("BENCHMARK(foo);", "foo").is_none());
    assert!(locate("int main(){}", "bench1").is_none());
}

#[test]
fn test_metacharacters_are_literal() {
    let text = "void a.b(benchmark::State& s) {}\nBENCHMARK(a.b);\nvoid axb(benchmark::State& s) {}";
    let m = locate(text, "a.b").unwrap();
    assert_eq!(&text[m.definition_name.clone()], "a.b");
    assert!(locate("void axb(benchmark::State& s) {}\nBENCHMARK(axb);", "a.b").is_none());
    assert!(locate(text, "(").is_none());
    assert!(locate(text, "[").is_none());
}

#[test]
fn test_include_directive() {
    let text = "#include <cstdio>\n#  include < c++ >\n";
    let include = IncludeDirective::compile().unwrap();
    let m = include.find(text).unwrap();
    assert_eq!(&text[m.range], "#  include < c++ >");

    let m = include.find("#include<C++>").unwrap();
    assert_eq!(m.range, 0..13);

    assert!(include.find("#include <cpp>").is_none());
}
