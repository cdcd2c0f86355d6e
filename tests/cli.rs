//! Tests the command line tool
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod cli {
    use std::fs::write;
    use std::process::{Command, Output};
    use elementary_tables::table::TableSet;

    fn run(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_elementary-tables"))
            .args(args)
            .output()
            .expect("failed to run elementary-tables")
    }

    fn bishop_yaml() -> String {
        let out = run(&["generate", "--piece", "bishop", "--format", "yaml", "--no-header"]);
        assert!(out.status.success());
        String::from_utf8(out.stdout).unwrap()
    }

    #[test]
    fn table_size_is_reported_for_standard_output() {
        let out = run(&["generate", "--piece", "bishop", "--format", "yaml", "--no-header"]);
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("table size: 5248"));

        let set: TableSet = serde_yaml::from_slice(&out.stdout).unwrap();
        assert_eq!(set.total_size(), 5248);
    }

    #[test]
    fn check_accepts_generated_tables() {
        let path = std::env::temp_dir().join(format!("elementary-tables-good-{}.yaml", std::process::id()));
        write(&path, bishop_yaml()).unwrap();

        let out = run(&["check", path.to_str().unwrap()]);
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("ok, table size 5248"));
    }

    #[test]
    fn check_names_the_square_with_a_bad_shift() {
        let yaml = bishop_yaml().replacen("shift: 58", "shift: 0", 1);
        let path = std::env::temp_dir().join(format!("elementary-tables-bad-{}.yaml", std::process::id()));
        write(&path, yaml).unwrap();

        let out = run(&["check", path.to_str().unwrap()]);
        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("bishop on a1"));
    }
}
