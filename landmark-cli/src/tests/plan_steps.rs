//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{DataDir, EXAMPLE_TEXT};
use super::*;
use crate::plan::run_plan;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct PlanWorld {
    data: DataDir,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        Self {
            data: DataDir::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["landmark-tour".to_owned(), "plan".to_owned()];
        argv.extend([
            format!("--{ARG_DATA_DIR}"),
            self.data.root().as_str().to_owned(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout_text(&self) -> String {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("the example data files exist")]
fn example_files_exist(#[from(world)] world: &PlanWorld) {
    world.data.write_example();
}

#[given("I limit the tour to 2 landmarks")]
fn limit_landmarks(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_LANDMARKS}"), "2".to_owned()]);
}

#[given("I request JSON output")]
fn request_json(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[given("the map file is missing")]
fn map_file_missing(#[from(world)] world: &PlanWorld) {
    std::fs::remove_file(world.data.root().join(landmark_data::MAP_FILE))
        .expect("remove map file");
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Plan(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_plan(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the example tour")]
fn prints_example_tour(#[from(world)] world: &PlanWorld) {
    assert_eq!(world.stdout_text(), EXAMPLE_TEXT);
}

#[then("the command prints a tour of Hotel, Museum and Hotel scoring 8.0")]
fn prints_limited_tour(#[from(world)] world: &PlanWorld) {
    let expected = "Maximized total attractiveness score: 8.0\n\
        The visited landmarks:\n\
        1-Hotel\n\
        2-Museum\n\
        3-Hotel\n\
        Total Travel Time: 12.0\n";
    assert_eq!(world.stdout_text(), expected);
}

#[then("the command prints a JSON report scoring 11")]
fn prints_json_report(#[from(world)] world: &PlanWorld) {
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout_text()).expect("output should be JSON");
    assert_eq!(value["score"], 11.0);
    assert_eq!(value["stops"][0]["name"], "Hotel");
    assert_eq!(value["stops"][3]["position"], 4);
}

#[then("the command fails because the map file is missing")]
fn fails_missing_map(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_MAP),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_example_tour, "planning the example tour");
register_plan_scenario!(plan_limited_tour, "limiting the number of landmarks");
register_plan_scenario!(plan_json_output, "requesting JSON output");
register_plan_scenario!(plan_missing_map, "rejecting a missing map file");
