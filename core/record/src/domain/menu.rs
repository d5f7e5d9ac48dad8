//! 番号メニューと確認入力の解釈

/// `1`..=`n` の番号で選ぶ。空・範囲外・数値以外は既定値
pub fn choose<T: Copy>(answer: &str, options: &[T], default: T) -> T {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i).copied())
        .unwrap_or(default)
}

/// Y/n 確認。空は Yes
pub fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
