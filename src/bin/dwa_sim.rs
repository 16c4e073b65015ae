// Mobile robot motion planning sample with Dynamic Window Approach
// author: Atsushi Sakai (@Atsushi_twi)
//         Ryohei Sasaki (@rsasaki0109)
//
// usage:
//   dwa_sim                         drive in the built-in arena
//   dwa_sim <grid.bin> [dwa.yaml]   drive on a saved obstacle grid
//   dwa_sim build-grid <out.bin>    save the built-in arena grid

use std::env;
use std::process;

use log::error;
use rust_dwa::mapping::{ObstacleGrid, DEFAULT_COLS, DEFAULT_RESOLUTION, DEFAULT_ROWS};
use rust_dwa::path_planning::dwa::{simulate_episode, DwaConfig, DwaPlanner};
use rust_dwa::{DwaState, PlannerResult, Point2D};

const MAX_STEPS: usize = 1000;

/// Arena border plus one pillar, sampled every 0.1 m
fn arena_obstacles() -> Vec<Point2D> {
    let (w, h) = (DEFAULT_COLS as f64 * DEFAULT_RESOLUTION, DEFAULT_ROWS as f64 * DEFAULT_RESOLUTION);
    let mut ob = Vec::new();
    for i in 0..=DEFAULT_COLS {
        let x = i as f64 * DEFAULT_RESOLUTION;
        ob.push(Point2D::new(x, 0.0));
        ob.push(Point2D::new(x, h));
    }
    for j in 1..DEFAULT_ROWS {
        let y = j as f64 * DEFAULT_RESOLUTION;
        ob.push(Point2D::new(0.0, y));
        ob.push(Point2D::new(w, y));
    }
    for j in 0..6 {
        ob.push(Point2D::new(1.0, 1.5 + j as f64 * DEFAULT_RESOLUTION));
    }
    ob
}

fn arena_grid() -> PlannerResult<ObstacleGrid> {
    ObstacleGrid::from_obstacles(&arena_obstacles(), DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_RESOLUTION)
}

fn run(args: &[String]) -> PlannerResult<()> {
    if args.len() >= 3 && args[1] == "build-grid" {
        arena_grid()?.save(&args[2])?;
        println!("grid saved to: {}", args[2]);
        return Ok(());
    }

    let planner = match args.len() {
        1 => DwaPlanner::new(arena_grid()?, DwaConfig::default())?,
        2 => DwaPlanner::from_files(&args[1], None::<&str>)?,
        _ => DwaPlanner::from_files(&args[1], Some(&args[2]))?,
    };

    // initial state [x(m), y(m), yaw(rad), v(m/s), omega(rad/s), v_n(m/s)]
    let start = DwaState::at_rest(0.5, 0.5, std::f64::consts::FRAC_PI_2);
    let goal = Point2D::new(1.5, 0.5);

    println!("DWA start!!");
    let episode = simulate_episode(&planner, start, goal, MAX_STEPS);
    let last = episode.final_state();
    println!(
        "steps: {}, final: ({:.3}, {:.3}, {:.3}), infeasible steps: {}",
        episode.controls.len(),
        last.x,
        last.y,
        last.yaw,
        episode.infeasible_steps
    );
    if episode.reached_goal {
        println!("Goal!!");
    }
    println!("Done");
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("dwa_sim: {}", e);
        process::exit(1);
    }
}
