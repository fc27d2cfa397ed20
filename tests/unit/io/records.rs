//! Tests for JSON grid records

#[cfg(test)]
mod tests {
    use gridbench::PlannerError;
    use gridbench::io::records::{CellValue, GridRecord};
    use gridbench::spatial::{Cell, OccupancyGrid};

    // Tests grids are written with 0/1 cells in row-major order
    // Verified by writing columns as rows
    #[test]
    fn test_grid_written_as_record() {
        let grid = OccupancyGrid::from_rows(vec![vec![false, true, false], vec![true, false, false]])
            .expect("valid rows");
        let json = grid.to_json().expect("serializable");

        assert_eq!(
            json,
            r#"{"width":3,"height":2,"occupancy":[[0,1,0],[1,0,0]]}"#
        );
        assert_eq!(OccupancyGrid::from_json(&json).expect("valid record"), grid);
    }

    // Tests booleans and arbitrary numbers are read by truthiness
    // Verified by treating only 1 as blocked
    #[test]
    fn test_mixed_cell_values() {
        let grid = OccupancyGrid::from_json(
            r#"{"width": 2, "height": 2, "occupancy": [[true, 0], [2.5, false]]}"#,
        )
        .expect("valid record");

        assert_eq!(grid.blocked(Cell::new(0, 0)), Some(true));
        assert_eq!(grid.blocked(Cell::new(0, 1)), Some(false));
        assert_eq!(grid.blocked(Cell::new(1, 0)), Some(true));
        assert_eq!(grid.blocked(Cell::new(1, 1)), Some(false));
        assert!(CellValue::Number(-1.0).is_blocked());
        assert!(!CellValue::Flag(false).is_blocked());
    }

    // Tests declared dimensions are checked against the occupancy rows
    // Verified by trusting the row data over the declared shape
    #[test]
    fn test_shape_mismatch_rejected() {
        let short = OccupancyGrid::from_json(r#"{"width": 2, "height": 3, "occupancy": [[0, 0], [0, 0]]}"#);
        assert!(matches!(short, Err(PlannerError::InvalidGrid { .. })));

        let narrow = OccupancyGrid::from_json(r#"{"width": 3, "height": 2, "occupancy": [[0, 0, 0], [0, 0]]}"#);
        assert!(matches!(narrow, Err(PlannerError::InvalidGrid { .. })));

        let empty = OccupancyGrid::from_json(r#"{"width": 0, "height": 0, "occupancy": []}"#);
        assert!(matches!(empty, Err(PlannerError::InvalidGrid { .. })));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = OccupancyGrid::from_json(r#"{"width": 2}"#);
        assert!(matches!(result, Err(PlannerError::Serialization { .. })));
    }

    #[test]
    fn test_record_into_grid() {
        let record = GridRecord {
            width: 1,
            height: 2,
            occupancy: vec![vec![CellValue::Flag(true)], vec![CellValue::Number(0.0)]],
        };
        let grid = record.into_grid().expect("consistent record");

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.free_cell_count(), 1);
    }

    // Tests the serde implementation applies the same shape checks
    // Verified by deserializing without validation
    #[test]
    fn test_serde_deserialize_validates() {
        let result: Result<OccupancyGrid, _> =
            serde_json::from_str(r#"{"width": 4, "height": 1, "occupancy": [[0, 0]]}"#);
        assert!(result.is_err());
    }
}
