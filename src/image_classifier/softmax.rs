use crate::image_classifier::models::model_config::OutputKind;

/// Index of the first highest score.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (index, &score)| match best {
            Some((_, best_score)) if score <= best_score => best,
            _ if score.is_nan() => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Probability of `index` as a percentage in `[0, 100]`. `None` when the
/// index is missing or the probability is not a finite number.
pub fn confidence_percent(scores: &[f32], index: usize, output: OutputKind) -> Option<f32> {
    let probability = match output {
        OutputKind::Logits => softmax(scores).get(index).copied(),
        OutputKind::Probabilities => scores.get(index).copied(),
    }?;

    if !probability.is_finite() {
        return None;
    }

    Some((probability * 100.0).clamp(0.0, 100.0))
}
