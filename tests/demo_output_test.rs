use anyhow::Result;
use small_seq::DemoEngine;

fn run_demo() -> Result<String> {
    let mut buffer = Vec::new();
    DemoEngine::new(&mut buffer).run()?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn test_demo_produces_expected_step_lines() -> Result<()> {
    let output = run_demo()?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10);

    assert_eq!(lines[0], "1.Sorted array: 23,23,32,43,43,43,54,65,76,98");
    assert_eq!(lines[1], "2.Duplicates: 23,43");
    assert_eq!(lines[2], "3.Replace: 23,23,32,43,43,43,54,65,175,98");
    assert_eq!(
        lines[3],
        "4.Added new element 276: 23,23,32,43,43,43,54,65,76,98,276"
    );
    assert_eq!(lines[4], "5.After filtering duplicates: 23,32,54,65,76,98,276");
    assert_eq!(lines[5], "6.New UniqueArray: 23,32,54,65,76,98");
    assert_eq!(lines[6], "7.Multiply by 10: 230,320,540,650,760,980");
    assert_eq!(lines[7], "8.Reverse as mutable: 98,76,65,54,43,43,43,32,23,23");
    assert_eq!(lines[8], "9.Reverse as immutable: 98,76,65,54,43,43,43,32,23,23");

    // key order in the JSON object is not fixed, so compare as values
    let json = lines[9]
        .strip_prefix("10.Display repeated times: ")
        .expect("step 10 line should carry its label");
    let report: serde_json::Value = serde_json::from_str(json)?;
    assert_eq!(
        report,
        serde_json::json!({"23 repeated ": 1, "43 repeated ": 2})
    );

    Ok(())
}

#[test]
fn test_demo_is_repeatable() -> Result<()> {
    // no globals anywhere in the step chain, so two runs must agree
    let first = run_demo()?;
    let second = run_demo()?;
    assert_eq!(first, second);
    Ok(())
}
