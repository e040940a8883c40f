pub mod geo_ops;
