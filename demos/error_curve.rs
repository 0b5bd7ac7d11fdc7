// Relative reconstruction error against the rank, for a random and a low rank image.

use plotters::prelude::*;
use rusty_lowrank::prelude::*;

pub fn main() {
    env_logger::init();

    let dimension = (160, 120);
    let mut rng = rand::thread_rng();

    let noisy = f64::random_image(dimension, &mut rng);
    let structured = f64::random_low_rank_image(dimension, 10, &mut rng);

    let curves: Vec<(&str, Vec<(usize, f64)>, RGBColor)> = vec![
        ("uniform noise", error_curve(&noisy), BLACK),
        ("rank 10 image", error_curve(&structured), RED),
    ];

    let root = BitMapBackend::new("error_curve.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(20)
        .y_label_area_size(50)
        .build_cartesian_2d(1..dimension.1, (1E-16..1.0).log_scale())
        .unwrap();

    chart
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|item| format!("{:.1E}", item))
        .y_desc("Relative Error")
        .draw()
        .unwrap();

    for (label, points, colour) in curves {
        chart
            .draw_series(LineSeries::new(points, &colour))
            .unwrap()
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &colour));
    }

    chart.configure_series_labels().draw().unwrap();

    println!("Saved error_curve.png");
}

fn error_curve(mat: &ndarray::Array2<f64>) -> Vec<(usize, f64)> {
    let svd = decompose(mat).unwrap();
    let norm = svd.truncation_error(1).unwrap().hypot(svd.s[0]);

    (1..svd.max_rank())
        .map(|rank| {
            let error = svd.truncation_error(rank).unwrap() / norm;
            (rank, error.max(1E-16))
        })
        .collect()
}
