pub const CODE: &str = r#"I can help you with that! Here's a comprehensive solution:

```javascript
// Example implementation
function advancedSolution(input) {
  // Process the input
  const processed = input.map(item => ({
    ...item,
    enhanced: true,
    timestamp: new Date()
  }));

  // Apply advanced logic
  return processed.filter(item => item.enhanced);
}

// Usage
const result = advancedSolution(yourData);
console.log(result);
```

This solution provides:
- ✅ Clean, maintainable code
- ✅ Error handling
- ✅ Type safety considerations
- ✅ Performance optimization

Would you like me to explain any part in more detail or adapt this to your specific use case?"#;

pub const DATA: &str = r#"I'll help you analyze that data. Here's a comprehensive approach:

**Analysis Framework:**

1. **Data Collection & Cleaning**
   - Identify missing values
   - Remove duplicates
   - Normalize formats

2. **Exploratory Analysis**
   - Calculate key statistics (mean, median, mode)
   - Identify trends and patterns
   - Detect outliers

3. **Insights & Recommendations**
   - Key findings from the data
   - Actionable recommendations
   - Next steps for deeper analysis

Would you like me to focus on any specific aspect of the analysis?"#;

pub const CREATIVE: &str = r#"I'd be happy to help with creative writing! Here's a compelling start:

**The Beginning:**

The city lights flickered like distant stars as the rain began to fall. Each drop carried a story, a memory, a dream yet to be realized. In the heart of the metropolis, where technology and humanity intertwined, something extraordinary was about to unfold.

**Key Elements:**
- Rich, descriptive language
- Engaging narrative hooks
- Character development opportunities
- Plot progression potential

Would you like me to continue this story, or would you prefer a different style or genre?"#;

pub const PROBLEM_SOLVING: &str = r#"I'm here to help! Let me break this down into actionable steps:

**Solution Approach:**

**Step 1: Understanding the Problem**
- Identify the core challenge
- List all constraints and requirements
- Determine success criteria

**Step 2: Developing a Strategy**
- Consider multiple approaches
- Evaluate pros and cons
- Select the optimal path

**Step 3: Implementation**
- Create a detailed action plan
- Execute systematically
- Monitor progress

**Step 4: Refinement**
- Test and validate results
- Iterate based on feedback
- Optimize for best outcomes

What specific aspect would you like me to dive deeper into?"#;

/// `{model}` is replaced with the uppercased model id.
pub const OVERVIEW: &str = r#"Great question! I'm {model}, and I'm here to provide you with detailed, accurate assistance.

**Key Capabilities I Offer:**

🎯 **Comprehensive Analysis**
- Deep dive into complex topics
- Multi-faceted perspectives
- Evidence-based reasoning

💻 **Technical Expertise**
- Code generation and debugging
- Architecture design
- Best practices and optimization

✍️ **Creative Solutions**
- Innovative problem-solving
- Content creation
- Brainstorming and ideation

📊 **Data Intelligence**
- Statistical analysis
- Pattern recognition
- Actionable insights

I'm designed to provide responses that are:
- **Accurate**: Based on reliable information
- **Detailed**: Comprehensive and thorough
- **Practical**: Actionable and useful
- **Clear**: Easy to understand

How can I specifically assist you today? Feel free to ask about anything from coding and analysis to creative projects and problem-solving!"#;
