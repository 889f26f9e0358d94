// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::sleep;

use nereid_route::{Edge, Obstacle, ObstacleId, RouterConfig, RoutingHost, RoutingSession};

const WINDOW: Duration = Duration::from_millis(100);

/// Host whose obstacles can be dragged while a session is running.
#[derive(Default)]
struct Canvas {
    obstacles: Mutex<Vec<Obstacle>>,
    edges: Mutex<Vec<Edge>>,
}

impl Canvas {
    fn with(obstacles: Vec<Obstacle>, edges: Vec<Edge>) -> Arc<Self> {
        Arc::new(Self {
            obstacles: Mutex::new(obstacles),
            edges: Mutex::new(edges),
        })
    }

    fn drag(&self, id: &str, x: f64, y: f64) {
        for obstacle in self.obstacles.lock().expect("obstacles").iter_mut() {
            if obstacle.id().as_str() == id {
                obstacle.set_position(x, y);
            }
        }
    }

    fn add(&self, obstacle: Obstacle, edge: Edge) {
        self.obstacles.lock().expect("obstacles").push(obstacle);
        self.edges.lock().expect("edges").push(edge);
    }
}

impl RoutingHost for Canvas {
    fn list_obstacles(&self) -> Vec<Obstacle> {
        self.obstacles.lock().expect("obstacles").clone()
    }

    fn list_edges(&self) -> Vec<Edge> {
        self.edges.lock().expect("edges").clone()
    }
}

fn oid(value: &str) -> ObstacleId {
    ObstacleId::new(value).expect("obstacle id")
}

fn link(source: &str, dest: &str) -> Edge {
    Edge::new(oid(source), oid(dest))
}

fn two_boxes() -> Arc<Canvas> {
    Canvas::with(
        vec![
            Obstacle::new(oid("a"), 0.0, 0.0, 20.0, 20.0),
            Obstacle::new(oid("b"), 70.0, 70.0, 20.0, 20.0),
        ],
        vec![link("a", "b")],
    )
}

fn config() -> RouterConfig {
    RouterConfig::new(10.0, 100.0, 100.0).with_debounce(WINDOW)
}

fn counting_session(host: Arc<Canvas>) -> (RoutingSession<Canvas>, Arc<AtomicUsize>) {
    let renders = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&renders);
    let session = RoutingSession::start_with_renderer(config(), host, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .expect("session");
    (session, renders)
}

#[tokio::test(start_paused = true)]
async fn fifty_changes_inside_the_window_trigger_one_pass() {
    let host = two_boxes();
    let (mut session, renders) = counting_session(Arc::clone(&host));
    sleep(Duration::from_millis(1)).await;
    assert_eq!(renders.load(Ordering::SeqCst), 1, "initial pass");

    for _ in 0..50 {
        session.on_obstacle_changed(oid("b"));
    }
    sleep(WINDOW / 2).await;
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    sleep(WINDOW).await;
    assert_eq!(renders.load(Ordering::SeqCst), 2);

    sleep(WINDOW * 10).await;
    assert_eq!(renders.load(Ordering::SeqCst), 2);
    assert_eq!(session.shutdown().await, 2);
}

#[tokio::test(start_paused = true)]
async fn the_pass_sees_the_latest_obstacle_state() {
    let host = two_boxes();
    let (mut session, _renders) = counting_session(Arc::clone(&host));
    sleep(Duration::from_millis(1)).await;

    for step in 0..20 {
        host.drag("b", 70.0, 70.0 - f64::from(step) * 3.5);
        session.on_obstacle_changed(oid("b"));
        sleep(Duration::from_millis(2)).await;
    }
    sleep(WINDOW * 2).await;

    // b ends at y = 3.5, covering rows 1-2.
    let path = session.get_path(&link("a", "b"));
    let end = *path.last().expect("routed");
    assert!((1..=2).contains(&end.row()), "path ends at {end}");
    assert!((8..=9).contains(&end.col()), "path ends at {end}");
    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn explicit_recompute_picks_up_new_obstacles_immediately() {
    let host = two_boxes();
    let (mut session, renders) = counting_session(Arc::clone(&host));
    sleep(Duration::from_millis(1)).await;

    host.add(
        Obstacle::new(oid("c"), 0.0, 70.0, 20.0, 20.0),
        link("b", "c"),
    );
    assert!(session.trigger_recompute());
    sleep(Duration::from_millis(1)).await;

    assert_eq!(renders.load(Ordering::SeqCst), 2);
    assert_eq!(session.routes().len(), 2);
    assert!(!session.get_path(&link("c", "b")).is_empty());
    assert_eq!(session.last_report().map(|report| report.routed), Some(2));
    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn occupancy_reflects_routed_paths() {
    let host = two_boxes();
    let (mut session, _renders) = counting_session(host);
    sleep(Duration::from_millis(1)).await;

    let path = session.get_path(&link("a", "b"));
    assert!(!path.is_empty());
    for cell in &path {
        assert!(session.is_occupied(cell.row(), cell.col()));
    }
    assert!(!session.is_occupied(-1, 0));
    assert!(!session.is_occupied(0, 100));
    session.shutdown().await;
}
