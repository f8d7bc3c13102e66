pub mod plot_fractal;
