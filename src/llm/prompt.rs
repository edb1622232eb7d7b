// Prompt assembly for manual questions.

use crate::llm::Message;

const SYSTEM_PROMPT: &str = "You are a car manual and maintenance assistant. \
Answer the user's question using only the manual excerpt you are given. \
Quote exact values (pressures, capacities, intervals) when the excerpt has them. \
If the excerpt does not contain the answer, say that the manual excerpt does not cover it.";

/// Build the chat messages for one question.
pub fn build_messages(context: &str, question: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "Manual excerpt:\n{context}\n\nQuestion: {question}"
        )),
    ]
}
