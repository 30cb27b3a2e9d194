pub(crate) mod points;
