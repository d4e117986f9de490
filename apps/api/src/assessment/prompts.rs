// All LLM prompt constants for the Assessment module.

/// Quiz generation prompt template. Replace `{skill}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Generate exactly 12 multiple-choice questions to assess knowledge in: {skill}.
For each question:
1. Phrase it clearly and concisely.
2. Provide 4 plausible options (labeled A-D).
3. Mark the correct answer.
4. Ensure questions progress from basic to advanced concepts.
5. Cover different aspects of the skill.
6. Avoid ambiguous wording.

Format response as JSON:
{
    "questions": [
        {
            "question": "Question text",
            "options": ["A. Option1", "B. Option2", "C. Option3", "D. Option4"],
            "correct_answer": "A"
        }
    ]
}"#;

/// Assessment report prompt template.
/// Replace: {skill}, {total}, {correct}, {accuracy}, {incorrect}
pub const REPORT_PROMPT_TEMPLATE: &str = r#"Create a detailed assessment report with:
- Brief introduction of the skill tested.
- Key strengths demonstrated.
- Main areas needing improvement.
- Recommended learning path.
- Resources for further study.

Skill assessed: {skill}

Results:
- Total questions: {total}
- Correct answers: {correct}
- Accuracy: {accuracy}%
- Incorrect questions: {incorrect}
"#;
