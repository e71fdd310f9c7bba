pub mod dataset;
pub mod fp;

pub use fp::{DisjunctiveMiner, FPTree, ItemOrder, MiningConfig, MiningError, MiningResult};

#[cfg(feature = "python")]
mod python {
    use std::collections::HashMap;
    use std::sync::{Mutex, MutexGuard};

    use numpy::PyReadonlyArray2;
    use once_cell::sync::Lazy;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    use crate::fp::{DisjunctiveMiner, MiningConfig, build_from_matrix};

    type PyItemsets = Vec<(Vec<usize>, usize)>;

    // Built trees kept alive between calls, keyed by handle
    static TREES: Lazy<Mutex<HashMap<usize, DisjunctiveMiner<usize>>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));
    static NEXT_HANDLE: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

    fn mine_with(miner: &DisjunctiveMiner<usize>, min_support: usize) -> PyResult<PyItemsets> {
        let config =
            MiningConfig::new(min_support).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let result = miner
            .mine(&config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.itemsets())
    }

    fn lock_trees() -> PyResult<MutexGuard<'static, HashMap<usize, DisjunctiveMiner<usize>>>> {
        TREES
            .lock()
            .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))
    }

    /// Mines a 0/1 transaction matrix in one call.
    #[pyfunction]
    fn mine_disjunctive(
        transactions: PyReadonlyArray2<'_, i32>,
        min_support: usize,
    ) -> PyResult<PyItemsets> {
        let (order, tree) = build_from_matrix(transactions.as_array());
        mine_with(&DisjunctiveMiner::from_parts(order, tree), min_support)
    }

    #[pyfunction]
    fn build_tree(transactions: PyReadonlyArray2<'_, i32>) -> PyResult<usize> {
        let (order, tree) = build_from_matrix(transactions.as_array());

        let mut handle_lock = NEXT_HANDLE
            .lock()
            .map_err(|e| PyRuntimeError::new_err(format!("Lock error: {}", e)))?;
        let handle = *handle_lock;
        *handle_lock += 1;
        drop(handle_lock);

        lock_trees()?.insert(handle, DisjunctiveMiner::from_parts(order, tree));
        Ok(handle)
    }

    /// Items are column indices, in any order.
    #[pyfunction]
    fn tree_support(handle: usize, items: Vec<usize>) -> PyResult<usize> {
        let trees = lock_trees()?;
        let miner = trees
            .get(&handle)
            .ok_or_else(|| PyValueError::new_err("Invalid tree handle"))?;
        Ok(miner.support(&items))
    }

    #[pyfunction]
    fn tree_mine(handle: usize, min_support: usize) -> PyResult<PyItemsets> {
        let trees = lock_trees()?;
        let miner = trees
            .get(&handle)
            .ok_or_else(|| PyValueError::new_err("Invalid tree handle"))?;
        mine_with(miner, min_support)
    }

    #[pyfunction]
    fn release_tree(handle: usize) -> PyResult<()> {
        lock_trees()?
            .remove(&handle)
            .ok_or_else(|| PyValueError::new_err("Invalid tree handle"))?;
        Ok(())
    }

    #[pymodule]
    fn dfim(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(mine_disjunctive, m)?)?;
        m.add_function(wrap_pyfunction!(build_tree, m)?)?;
        m.add_function(wrap_pyfunction!(tree_support, m)?)?;
        m.add_function(wrap_pyfunction!(tree_mine, m)?)?;
        m.add_function(wrap_pyfunction!(release_tree, m)?)?;
        Ok(())
    }
}
