use std::fs;

use reckon::Calculator;
use walkdir::WalkDir;

/// Runs every `expression => expected` line of the `.calc` scripts.
///
/// `expected` is the display form of the value, or `!` followed by the
/// error kind. Blank lines and lines starting with `#` are skipped.
#[test]
fn script_cases_hold() {
    let calculator = Calculator::new().unwrap();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((expression, expected)) = line.rsplit_once("=>") else {
                panic!("{path:?}:{} has no `=>`: {line}", i + 1);
            };
            let (expression, expected) = (expression.trim(), expected.trim());

            let actual = match calculator.evaluate(expression) {
                Ok(value) => value.to_string(),
                Err(e) => format!("!{}", e.kind()),
            };
            count += 1;

            assert_eq!(actual, expected, "{path:?}:{}: {expression}", i + 1);
        }
    }

    assert!(count > 0, "No cases found in tests/scripts");
}
