//! DBSCAN on a simple 2D dataset: eps estimation, clustering, and metrics.

use denscan::{estimate_eps, Dbscan, DbscanExt, Metric};

fn main() {
    // Two dense groups and a couple of stragglers.
    let data: Vec<Vec<f64>> = vec![
        // Group A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Group B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Outliers
        vec![10.0, 0.0],
        vec![-8.0, 7.5],
    ];

    // --- Pick a starting epsilon from the k-distance distribution ---
    let est = estimate_eps(&data, 3).unwrap();
    println!("=== eps estimation (k=3) ===");
    println!("  suggested eps: {:.3}", est.suggested_eps);

    // --- DBSCAN with the k-d tree index ---
    let dbscan = Dbscan::new(1.0, 3).with_kdtree(true);
    let fit = dbscan.fit(&data).unwrap();
    println!("\n=== DBSCAN (eps=1.0, min_pts=3) ===");
    println!("  clusters found: {}", fit.n_clusters);
    for (i, label) in fit.labels.iter().enumerate() {
        let tag = match label {
            Some(id) => format!("cluster {}", id),
            None => "NOISE".to_string(),
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }

    // --- Same data under the Manhattan metric (brute force) ---
    let dbscan = Dbscan::new(1.0, 3).with_metric(Metric::Manhattan);
    let labels = dbscan.fit_predict_with_noise(&data).unwrap();
    println!("\n=== DBSCAN, Manhattan metric ===");
    for (i, label) in labels.iter().enumerate() {
        let tag = match label {
            Some(id) => format!("cluster {}", id),
            None => "NOISE".to_string(),
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }
}
