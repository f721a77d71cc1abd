#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        Point::new($x, $y)
    };
}

#[macro_export]
macro_rules! weight_vector {
    ($w_x:expr, $w_y:expr, $w_bias:expr) => {
        WeightVector::new($w_x, $w_y, $w_bias)
    };
}
