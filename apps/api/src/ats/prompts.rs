// LLM prompt constants for the ATS evaluation module.

/// Resume evaluation prompt. The resume text is appended after this block.
pub const ATS_EVALUATION_PROMPT: &str = r#"Please analyze the following resume and provide:
1. An overall score out of 100.
2. Scores for different categories (format, content, relevance, clarity, impact statements, skills presentation) out of 100.
3. Specific feedback for improvement in each category.
4. Recommendations to achieve a better score.

Return the results as a valid JSON object with the following structure:
{
    "overall_score": 85,
    "category_scores": {
        "format": 80,
        "content": 85,
        "relevance": 90,
        "clarity": 75,
        "impact_statements": 70,
        "skills_presentation": 85
    },
    "feedback": {
        "format": "Feedback on format...",
        "content": "Feedback on content...",
        "relevance": "Feedback on relevance...",
        "clarity": "Feedback on clarity...",
        "impact_statements": "Feedback on impact statements...",
        "skills_presentation": "Feedback on skills presentation..."
    },
    "recommendations": [
        "Recommendation 1",
        "Recommendation 2",
        "Recommendation 3",
        "Recommendation 4",
        "Recommendation 5"
    ]
}

The resume is as follows:
"#;
