use dnd_table::dnd::HeaderDragController;
use dnd_table::table::{reorder_columns, ColumnDef, ColumnId, PositionIndexMap, TableController};
use proptest::prelude::*;

fn columns(n: usize) -> Vec<ColumnDef<u32>> {
    (0..n)
        .map(|i| ColumnDef::accessor(format!("c{}", i), move |row: &u32| i64::from(*row + i as u32).into()))
        .collect()
}

fn ids(table: &TableController<u32>) -> Vec<String> {
    table.column_ids().iter().map(|c| c.to_string()).collect()
}

fn drop_onto(table: &mut TableController<u32>, dragged: usize, target: usize) {
    let headers = table.instance().headers();
    let positions = PositionIndexMap::from_headers(&headers);
    let mut controller = HeaderDragController::new(headers[target].column_id.clone());
    let dragged_id: ColumnId = headers[dragged].column_id.clone();
    controller
        .on_drop(&dragged_id, &positions, table)
        .unwrap();
}

proptest! {
    #[test]
    fn reorder_is_a_permutation(
        len in 1usize..12,
        picks in prop::collection::vec((0usize..100, 0usize..100), 0..20),
    ) {
        let mut table = TableController::new(columns(len), vec![1, 2, 3]).unwrap();
        let mut expected: Vec<String> = ids(&table);
        expected.sort();

        for (a, b) in &picks {
            drop_onto(&mut table, a % len, b % len);
        }

        let mut actual = ids(&table);
        prop_assert_eq!(table.mutation_count(), picks.len() as u64);
        actual.sort();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(table.rows().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn dropping_onto_self_changes_nothing(
        len in 1usize..12,
        shuffle in prop::collection::vec((0usize..100, 0usize..100), 0..8),
        pick in 0usize..100,
    ) {
        let mut table = TableController::new(columns(len), Vec::new()).unwrap();
        for (a, b) in &shuffle {
            drop_onto(&mut table, a % len, b % len);
        }
        let before = ids(&table);
        let index = pick % len;

        drop_onto(&mut table, index, index);
        prop_assert_eq!(ids(&table), before);
    }

    #[test]
    fn reorder_moves_exactly_one_element(
        len in 1usize..20,
        from in 0usize..100,
        to in 0usize..100,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let (from, to) = (from % len, to % len);
        let moved = reorder_columns(&items, from, to).unwrap();

        prop_assert_eq!(moved[to], from);
        let mut rest = moved.clone();
        rest.remove(to);
        let mut original = items.clone();
        original.remove(from);
        prop_assert_eq!(rest, original);
    }
}
