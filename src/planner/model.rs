use std::collections::BTreeMap;

/// Binary quadratic model over 0/1 variables.
///
/// `E(x) = offset + Σ h_i x_i + Σ_{i<j} J_ij x_i x_j`
#[derive(Debug, Clone, Default)]
pub struct BinaryQuadraticModel {
    labels: Vec<String>,
    linear: Vec<f64>,
    /// Keyed by `(i, j)` with `i < j`.
    quadratic: BTreeMap<(usize, usize), f64>,
    offset: f64,
}

impl BinaryQuadraticModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable and return its index.
    pub fn add_variable(&mut self, label: impl Into<String>) -> usize {
        self.labels.push(label.into());
        self.linear.push(0.0);
        self.labels.len() - 1
    }

    pub fn add_linear(&mut self, var: usize, bias: f64) {
        self.linear[var] += bias;
    }

    /// Add a pairwise term. A term on a single variable folds into its linear
    /// bias since `x * x = x` for binaries.
    pub fn add_quadratic(&mut self, u: usize, v: usize, bias: f64) {
        if u == v {
            self.add_linear(u, bias);
            return;
        }
        let key = if u < v { (u, v) } else { (v, u) };
        *self.quadratic.entry(key).or_insert(0.0) += bias;
    }

    pub fn add_offset(&mut self, value: f64) {
        self.offset += value;
    }

    /// Add `strength * (expr)^2`, expanded into linear, quadratic and constant terms.
    pub fn add_squared_penalty(&mut self, expr: &LinearExpr, strength: f64) {
        let terms = expr.merged_terms();
        let c = expr.constant;

        for (k, &(i, a)) in terms.iter().enumerate() {
            // a^2 x^2 = a^2 x, plus the cross term with the constant
            self.add_linear(i, strength * (a * a + 2.0 * a * c));
            for &(j, b) in &terms[k + 1..] {
                self.add_quadratic(i, j, strength * 2.0 * a * b);
            }
        }
        self.add_offset(strength * c * c);
    }

    /// Energy of a full assignment.
    pub fn energy(&self, state: &[bool]) -> f64 {
        debug_assert_eq!(state.len(), self.num_variables());

        let linear: f64 = self
            .linear
            .iter()
            .zip(state)
            .filter(|(_, on)| **on)
            .map(|(h, _)| h)
            .sum();
        let quadratic: f64 = self
            .quadratic
            .iter()
            .filter(|((i, j), _)| state[*i] && state[*j])
            .map(|(_, bias)| bias)
            .sum();

        self.offset + linear + quadratic
    }

    /// Per-variable neighbor lists `(j, J_ij)`, for incremental energy updates.
    pub fn adjacency(&self) -> Vec<Vec<(usize, f64)>> {
        let mut adj = vec![Vec::new(); self.num_variables()];
        for (&(i, j), &bias) in &self.quadratic {
            if bias != 0.0 {
                adj[i].push((j, bias));
                adj[j].push((i, bias));
            }
        }
        adj
    }

    pub fn num_variables(&self) -> usize {
        self.labels.len()
    }

    pub fn num_interactions(&self) -> usize {
        self.quadratic.len()
    }

    pub fn label(&self, var: usize) -> &str {
        &self.labels[var]
    }

    pub fn linear(&self, var: usize) -> f64 {
        self.linear[var]
    }

    pub fn linear_biases(&self) -> &[f64] {
        &self.linear
    }

    /// Pairwise bias between two variables (0 when absent).
    pub fn quadratic(&self, u: usize, v: usize) -> f64 {
        let key = if u < v { (u, v) } else { (v, u) };
        self.quadratic.get(&key).copied().unwrap_or(0.0)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Affine expression `Σ a_i x_i + c` over model variables.
#[derive(Debug, Clone, Default)]
pub struct LinearExpr {
    terms: Vec<(usize, f64)>,
    constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constant(constant: f64) -> Self {
        Self {
            terms: Vec::new(),
            constant,
        }
    }

    pub fn add_term(&mut self, var: usize, coeff: f64) -> &mut Self {
        if coeff != 0.0 {
            self.terms.push((var, coeff));
        }
        self
    }

    pub fn add_constant(&mut self, value: f64) -> &mut Self {
        self.constant += value;
        self
    }

    /// Value for an assignment.
    pub fn evaluate(&self, state: &[bool]) -> f64 {
        self.constant
            + self
                .terms
                .iter()
                .filter(|(i, _)| state[*i])
                .map(|(_, a)| a)
                .sum::<f64>()
    }

    /// Terms with repeated variables combined.
    fn merged_terms(&self) -> Vec<(usize, f64)> {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for &(i, a) in &self.terms {
            *merged.entry(i).or_insert(0.0) += a;
        }
        merged.into_iter().filter(|(_, a)| *a != 0.0).collect()
    }
}
