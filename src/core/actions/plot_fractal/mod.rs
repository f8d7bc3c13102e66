pub mod plot_fractal;

pub use plot_fractal::plot_fractal;
